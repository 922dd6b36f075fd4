use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(bcd_daa)");
    println!("cargo:rerun-if-changed=build.rs");

    // `cfg!(target_arch)` in here would describe the host, not the target.
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let portable = env::var_os("CARGO_FEATURE_PORTABLE").is_some();

    // `daa`/`das` are invalid in 64-bit mode, so only plain x86 qualifies.
    if arch == "x86" && !portable {
        println!("cargo:rustc-cfg=bcd_daa");
    }
}
