//! Files in scope for the Volo audit.

/// In-scope Move sources, in audit order. Each path appears once.
pub const SCOPE_FILES: &[&str] = &[
    "liquid_staking/sources/stake_pool.move",
    "liquid_staking/sources/manage.move",
    "liquid_staking/sources/fee_config.move",
    "liquid_staking/sources/volo_v1/native_pool.move",
    "liquid_staking/sources/volo_v1/validator_set.move",
    "liquid_staking/sources/volo_v1/ownership.move",
    "liquid_staking/sources/volo_v1/unstake_ticket.move",
    "liquid_staking/sources/volo_v1/math.move",
    "liquid_staking/sources/cert.move",
    "liquid_staking/sources/validator_pool.move",
    "liquid_staking/sources/migration/migrate.move",
    "volo-vault/sources/utils.move",
    "volo-vault/sources/volo_vault.move",
    "volo-vault/sources/manage.move",
    "volo-vault/sources/operation.move",
    "volo-vault/sources/user_entry.move",
    "volo-vault/sources/vault_receipt_info.move",
    "volo-vault/sources/receipt.move",
    "volo-vault/sources/requests/withdraw_request.move",
    "volo-vault/sources/requests/deposit_request.move",
    "volo-vault/sources/adaptors/momentum.adaptor.move",
    "volo-vault/sources/adaptors/cetus_adaptor.move",
    "volo-vault/sources/adaptors/suilend_adaptor.move",
    "volo-vault/sources/adaptors/receipt_adaptor.move",
    "volo-vault/sources/adaptors/navi_adaptor.move",
    "volo-vault/sources/reward_manager.move",
    "volo-vault/sources/oracle.move",
    "volo-vault/health-limiter/sources/adaptors/navi_limiter.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/utils/decimal.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/utils/hash.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/schemas/queue.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/schemas/aggregator.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/schemas/oracle.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/aggregator/aggregator_set_authority_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/aggregator/aggregator_init_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/aggregator/aggregator_set_configs_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/aggregator/aggregator_delete_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/aggregator/aggregator_submit_result_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/oracle/oracle_init_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/oracle/oracle_attest_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/state/set_guardian_queue_id_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/state/set_package_id_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/state/set_oracle_queue_id_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/queue/queue_set_authority_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/queue/queue_set_configs_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/queue/queue_add_fee_coin_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/queue/oracle_queue_init_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/queue/queue_remove_fee_coin_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/queue/queue_override_oracle_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/actions/queue/guardian_queue_init_action.move",
    "volo-vault/local_dependencies/switchboard_sui/on_demand/sources/on_demand.move",
    "volo-vault/local_dependencies/mmt_v3/sources/global_config.move",
    "volo-vault/local_dependencies/mmt_v3/sources/pool.move",
    "volo-vault/local_dependencies/mmt_v3/sources/tick.move",
    "volo-vault/local_dependencies/mmt_v3/sources/liquidity.move",
    "volo-vault/local_dependencies/mmt_v3/sources/i128.move",
    "volo-vault/local_dependencies/mmt_v3/sources/collect.move",
    "volo-vault/local_dependencies/mmt_v3/sources/utils/utils.move",
    "volo-vault/local_dependencies/mmt_v3/sources/utils/liquidity_math.move",
    "volo-vault/local_dependencies/mmt_v3/sources/utils/sqrt_price_math.move",
    "volo-vault/local_dependencies/mmt_v3/sources/utils/tick_math.move",
    "volo-vault/local_dependencies/mmt_v3/sources/utils/constants.move",
    "volo-vault/local_dependencies/mmt_v3/sources/utils/swap_math.move",
    "volo-vault/local_dependencies/mmt_v3/sources/utils/comparator.move",
    "volo-vault/local_dependencies/mmt_v3/sources/utils/bit_math.move",
    "volo-vault/local_dependencies/mmt_v3/sources/utils/oracle.move",
    "volo-vault/local_dependencies/mmt_v3/sources/version.move",
    "volo-vault/local_dependencies/mmt_v3/sources/i64.move",
    "volo-vault/local_dependencies/mmt_v3/sources/i32.move",
    "volo-vault/local_dependencies/mmt_v3/sources/position.move",
    "volo-vault/local_dependencies/mmt_v3/sources/create_pool.move",
    "volo-vault/local_dependencies/mmt_v3/sources/trade.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/account.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/lending.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/logic.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/manage.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/validation.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/pool.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/incentive.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/storage.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/error.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/version.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/constants.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/dynamic_calculator.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/incentive_v3.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/calculator.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/incentive_v2.move",
    "volo-vault/local_dependencies/protocol/lending_core/sources/flash_loan.move",
    "volo-vault/local_dependencies/protocol/lending_ui/sources/incentive.move",
    "volo-vault/local_dependencies/protocol/lending_ui/sources/calculate.move",
    "volo-vault/local_dependencies/protocol/lending_ui/sources/getter.move",
    "volo-vault/local_dependencies/protocol/lending_ui/sources/incentive_v3.move",
    "volo-vault/local_dependencies/protocol/oracle/sources/oracle_pro.move",
    "volo-vault/local_dependencies/protocol/oracle/sources/oracle_manage.move",
    "volo-vault/local_dependencies/protocol/oracle/sources/oracle_error.move",
    "volo-vault/local_dependencies/protocol/oracle/sources/adaptor_pyth.move",
    "volo-vault/local_dependencies/protocol/oracle/sources/oracle_provider.move",
    "volo-vault/local_dependencies/protocol/oracle/sources/oracle_dynamic_getter.move",
    "volo-vault/local_dependencies/protocol/oracle/sources/strategy.move",
    "volo-vault/local_dependencies/protocol/oracle/sources/oracle_utils.move",
    "volo-vault/local_dependencies/protocol/oracle/sources/config.move",
    "volo-vault/local_dependencies/protocol/oracle/sources/oracle_version.move",
    "volo-vault/local_dependencies/protocol/oracle/sources/adaptor_supra.move",
    "volo-vault/local_dependencies/protocol/oracle/sources/oracle.move",
    "volo-vault/local_dependencies/protocol/oracle/sources/oracle_constants.move",
    "volo-vault/local_dependencies/protocol/utils/sources/utils.move",
    "volo-vault/local_dependencies/protocol/math/sources/ray_math.move",
    "volo-vault/local_dependencies/protocol/math/sources/safe_math.move",
    "volo-vault/local_dependencies/suilend_d/sprungsui/sources/sprungsui.move",
    "volo-vault/local_dependencies/suilend_d/suilend/sources/staker.move",
    "volo-vault/local_dependencies/suilend_d/suilend/sources/liquidity_mining.move",
    "volo-vault/local_dependencies/suilend_d/suilend/sources/decimal.move",
    "volo-vault/local_dependencies/suilend_d/suilend/sources/reserve_config.move",
    "volo-vault/local_dependencies/suilend_d/suilend/sources/oracles.move",
    "volo-vault/local_dependencies/suilend_d/suilend/sources/rate_limiter.move",
    "volo-vault/local_dependencies/suilend_d/suilend/sources/obligation.move",
    "volo-vault/local_dependencies/suilend_d/suilend/sources/cell.move",
    "volo-vault/local_dependencies/suilend_d/suilend/sources/reserve.move",
    "volo-vault/local_dependencies/suilend_d/suilend/sources/lending_market_registry.move",
    "volo-vault/local_dependencies/suilend_d/suilend/sources/lending_market.move",
    "volo-vault/local_dependencies/suilend_d/suilend/sources/suilend.move",
];

/// Render paths as a Python list literal, the form the prompts embed in a ```python fence.
///
/// Items are single-quoted like Python's `repr`; backslashes and single quotes are
/// escaped so the literal stays valid Python.
pub fn python_list_literal<S: AsRef<str>>(paths: &[S]) -> String {
    let items: Vec<String> = paths
        .iter()
        .map(|path| format!("'{}'", path.as_ref().replace('\\', "\\\\").replace('\'', "\\'")))
        .collect();
    format!("[{}]", items.join(", "))
}

/// The scope registry as a Python list literal.
pub fn scope_files_literal() -> String {
    python_list_literal(SCOPE_FILES)
}
