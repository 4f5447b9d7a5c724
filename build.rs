fn main() {
    // Only the espidf feature needs the ESP-IDF sysenv plumbing; host
    // builds (tests) must not touch the SDK environment.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
