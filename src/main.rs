fn main() {
    dagsmith::app::cli::run();
}
