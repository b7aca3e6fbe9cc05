//! exprcheck CLI entry point

fn main() {
    exprcheck::cli::run();
}
