// Shared build-script helper that prepares each crate's README for rustdoc.
//
// Library crates embed their README as crate-level documentation. Relative
// links such as `](src/controller.rs)` resolve when the README is viewed on
// GitHub but dangle inside rendered rustdoc, so each build script rewrites
// them against the repository URL declared in the workspace manifest and
// writes the result to `$OUT_DIR/README_GENERATED.md`.
//
// Pulled in via `include!` from each crate's build.rs; the includer brings
// `std::{env, fs}` and `std::path::Path` into scope.

/// Rewrites the README of the crate at `crate_dir` and writes the result
/// into `OUT_DIR`.
///
/// A missing README produces an empty generated file rather than a build
/// failure so a fresh crate stays buildable before it is documented.
pub fn generate_crate_docs(crate_dir: &str) {
    let crate_dir = Path::new(crate_dir);
    let readme = crate_dir.join("README.md");
    println!("cargo:rerun-if-changed={}", readme.display());

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let source = fs::read_to_string(&readme).unwrap_or_default();
    let rewritten = rewrite_relative_links(&source, crate_dir);
    fs::write(Path::new(&out_dir).join("README_GENERATED.md"), rewritten)
        .expect("failed to write generated crate docs");
}

fn rewrite_relative_links(readme: &str, crate_dir: &Path) -> String {
    let Some(repo) = workspace_repository(crate_dir) else {
        return readme.to_owned();
    };
    let crate_name = crate_dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let source_prefix = format!("]({repo}/blob/main/crates/{crate_name}/src/");
    readme
        .replace("](src/", &source_prefix)
        .replace("](../../README.md", &format!("]({repo}/blob/main/README.md"))
}

// Reads the `repository` field out of the workspace manifest two levels up.
fn workspace_repository(crate_dir: &Path) -> Option<String> {
    let manifest = crate_dir.parent()?.parent()?.join("Cargo.toml");
    let content = fs::read_to_string(manifest).ok()?;
    for line in content.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("repository")
            && let Some(url) = rest.split('"').nth(1)
        {
            return Some(url.trim_end_matches('/').to_owned());
        }
    }
    None
}
