fn main() {
    kubegen::app::cli::run();
}
