//! Package name patterns used by the snapshot filter.

use regex::Regex;
use std::sync::LazyLock;

static LIBRARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^lib.+$").expect("library pattern compiles"));

/// Packages that start with `lib` but are tools, plugins, modules and the like.
static LIBRARY_EXCEPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"(?:lib.*(?:bin|tool|prog|script|exec|util|client|server|srv|plugin|ext|mod|core|base|extra|proto|conf|option|param|test)",
        r"|libc(?:-|\d|$)|libnss-|libvirt-|libnetfilter-|libblockdev-).*",
        r"|lib.*cli",
        r"|libinput-pad-xtest|libapache2-mod-|libapache2-mpm-|libphp-jpgraph|libtiff-opengl",
        r")$",
    ))
    .expect("library exception pattern compiles")
});

/// `lib<prefix><version><suffix>` where prefix and suffix hold no digits.
static SONAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(lib[^\d]*)(\d+(?:[\.-]\d+)*)([^\d]*)$").expect("soname pattern compiles")
});

/// `python<version><rest>`; the version may be empty.
static PYTHON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(python)(\d+(?:\.\d+)*|)(.*)$").expect("python pattern compiles")
});

/// True for shared-library packages whose churn is not worth reporting
pub fn is_noise_library(name: &str) -> bool {
    LIBRARY.is_match(name) && !LIBRARY_EXCEPTION.is_match(name)
}

/// Fold version numbers out of a package name
///
/// `libfoo5` → `libfooX`, `libgtk-3-0t64` stays (digits in suffix),
/// `libssl3.0` → `libsslX.X`, `python3.11-venv` → `pythonX-venv`.
pub fn normalize_name(name: &str) -> String {
    let folded = SONAME
        .captures(name)
        .map(|caps| format!("{}{}{}", &caps[1], soname_placeholder(&caps[2]), &caps[3]))
        .unwrap_or_else(|| name.to_string());

    PYTHON
        .captures(&folded)
        .map(|caps| format!("{}X{}", &caps[1], &caps[3]))
        .unwrap_or_else(|| folded.clone())
}

/// Placeholder with the arity of the version: `X`, `X.X` or `X.X.X`
fn soname_placeholder(version: &str) -> &'static str {
    match version.split(['.', '-']).count() {
        1 => "X",
        2 => "X.X",
        _ => "X.X.X",
    }
}
