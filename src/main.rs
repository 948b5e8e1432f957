fn main() {
    volo_prompts::app::cli::run();
}
