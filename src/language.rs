//! @ai:module:intent Classify which files the directory walker should visit
//! @ai:module:layer domain
//! @ai:module:public_api is_kotlin_file, in_build_output
//! @ai:module:stateless true

use std::path::Path;

/// @ai:intent Extensions treated as Kotlin source
const KOTLIN_EXTENSIONS: &[&str] = &["kt", "kts"];

/// @ai:intent Check if a path is a Kotlin source file
/// @ai:example ("Main.kt") -> true
/// @ai:example ("build.gradle.kts") -> true
/// @ai:example ("README.md") -> false
/// @ai:effects pure
pub fn is_kotlin_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| KOTLIN_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// @ai:intent Check if a path sits inside a build output directory
/// @ai:example ("app/build/generated/Gen.kt") -> true
/// @ai:example ("app/src/main/Main.kt") -> false
/// @ai:effects pure
///
/// Gradle puts generated and compiled sources under `build/`; those are not
/// hand-maintained and are skipped during discovery.
pub fn in_build_output(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == "build")
}
