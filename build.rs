// Repository tests need a live PostgreSQL server; compile them only when
// one is configured.
fn main() {
    println!("cargo:rerun-if-env-changed=DATABASE_URL");
    if std::env::var_os("DATABASE_URL").is_some() {
        println!("cargo:rustc-cfg=postgres_tests");
    }
}
