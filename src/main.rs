fn main() {
    divat::app::cli::run();
}
