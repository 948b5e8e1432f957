//! Documentation base URL selection.

use url::Url;

use crate::domain::configuration::MirrorSettings;
use crate::domain::{AppError, RunCounter};

/// Resolve the documentation URL for this process.
///
/// An unset run counter selects the canonical `<host>/<source_repo>` page. Any other
/// counter selects `<host>/<org>/<repo_name>-NNN`, where `NNN` is the cyclic index of
/// the run zero-padded to three digits.
pub fn resolve_base_url(counter: RunCounter, mirror: &MirrorSettings) -> Result<Url, AppError> {
    let host = mirror.host.trim_end_matches('/');
    let raw = match counter.mirror_index(mirror.max_index)? {
        None => format!("{}/{}", host, mirror.source_repo),
        Some(index) => format!("{}/{}/{}", host, mirror.org, mirror_repo_name(mirror, index)),
    };
    Url::parse(&raw).map_err(|err| {
        AppError::invalid_input("base URL", format!("'{}' is not a valid URL: {}", raw, err))
    })
}

/// Name of the numbered mirror repository for a given slot.
pub fn mirror_repo_name(mirror: &MirrorSettings, index: u32) -> String {
    format!("{}-{:03}", mirror.repo_name, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(raw: &str) -> Result<Url, AppError> {
        resolve_base_url(raw.parse()?, &MirrorSettings::default())
    }

    #[test]
    fn sentinel_selects_canonical_url() {
        assert_eq!(
            resolve("0").unwrap().as_str(),
            "https://deepwiki.com/Sui-Volo/volo-smart-contracts"
        );
    }

    #[test]
    fn first_run_selects_first_mirror() {
        assert_eq!(
            resolve("1").unwrap().as_str(),
            "https://deepwiki.com/grass-dev-pa/volo-smart-contracts-001"
        );
    }

    #[test]
    fn last_slot_is_not_wrapped() {
        assert!(resolve("30").unwrap().as_str().ends_with("-030"));
    }

    #[test]
    fn run_past_bound_wraps_to_first_mirror() {
        assert!(resolve("31").unwrap().as_str().ends_with("-001"));
        assert!(resolve("45").unwrap().as_str().ends_with("-015"));
    }

    #[test]
    fn malformed_counter_fails_resolution() {
        assert!(matches!(resolve("nightly"), Err(AppError::InvalidInput { .. })));
    }

    #[test]
    fn custom_settings_are_honoured() {
        let mirror = MirrorSettings {
            host: "https://docs.example.org/".into(),
            org: "mirrors".into(),
            repo_name: "vault".into(),
            max_index: 5,
            ..MirrorSettings::default()
        };
        let url = resolve_base_url(RunCounter::Run(7), &mirror).unwrap();
        assert_eq!(url.as_str(), "https://docs.example.org/mirrors/vault-002");
    }
}
