use vitrine_build::{BuildIdResolver, REVISION_ENV_VARS};

fn main() {
    // Resolved once per build; embedded via the VITRINE_BUILD_ID constant.
    let build_id = BuildIdResolver::from_process().resolve();

    println!("cargo:rustc-env=VITRINE_BUILD_ID={build_id}");
    println!("cargo:rerun-if-changed=.git/HEAD");
    for var in REVISION_ENV_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }
}
