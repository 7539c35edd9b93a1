fn main() {
    chainorder::app::cli::run();
}
