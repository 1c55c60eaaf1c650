//! Path-string shaping.
//!
//! These helpers operate on path text, not on `Path` values: they never touch
//! the filesystem except for the root enumeration in [`ensure_root_prefix`].
//! Functions that only ever shorten their input return a borrowed slice;
//! functions that may grow it return `Cow` so unchanged input is not copied.

use std::borrow::Cow;
use std::path::{Component, PathBuf, MAIN_SEPARATOR};

const TAB_REPLACEMENT: &str = "    ";

/// Replace every tab with four spaces.
pub fn replace_tabs(text: &str) -> Cow<'_, str> {
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', TAB_REPLACEMENT))
    } else {
        Cow::Borrowed(text)
    }
}

/// Replace every `/` with the host separator.
pub fn normalize_separator(check: &str) -> Cow<'_, str> {
    if check.contains('/') {
        let mut buf = [0u8; 4];
        Cow::Owned(check.replace('/', MAIN_SEPARATOR.encode_utf8(&mut buf)))
    } else {
        Cow::Borrowed(check)
    }
}

/// Make sure the text ends with a separator.
///
/// The separator style already in use wins: `/` is checked first, then `\`.
/// Text with neither gets the host separator.
pub fn ensure_trailing_separator(check: &str) -> Cow<'_, str> {
    let append = if check.contains('/') {
        (!check.ends_with('/')).then_some('/')
    } else if check.contains('\\') {
        (!check.ends_with('\\')).then_some('\\')
    } else {
        Some(MAIN_SEPARATOR)
    };

    match append {
        Some(sep) => {
            let mut out = String::with_capacity(check.len() + 1);
            out.push_str(check);
            out.push(sep);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(check),
    }
}

/// Drop a trailing separator the way existing callers expect.
///
/// When the text ends with `/` or `\`, this truncates at the last host
/// separator and then drops one more character, so `"a/bc/"` becomes `"a/b"`.
/// Text whose trailing separator is not the host separator, and that contains
/// no host separator, is returned unchanged.
pub fn strip_trailing_separator(check: &str) -> &str {
    if !(check.ends_with('/') || check.ends_with('\\')) {
        return check;
    }

    match check.rfind(MAIN_SEPARATOR) {
        Some(end) => drop_last_char(&check[..end]),
        None => check,
    }
}

fn drop_last_char(text: &str) -> &str {
    match text.char_indices().next_back() {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Everything before the last host separator, or the whole text if there is none.
pub fn strip_after_last_separator(directory: &str) -> &str {
    match directory.rfind(MAIN_SEPARATOR) {
        Some(end) => &directory[..end],
        None => directory,
    }
}

/// Remove the last extension. Dot-files such as `.rcfile` are left alone.
pub fn strip_extension(strip: &str) -> &str {
    match strip.rfind('.') {
        Some(pos) if pos > 0 => &strip[..pos],
        _ => strip,
    }
}

/// Prefix the text with the working directory's root unless it already starts
/// with one of the host's filesystem roots (compared case-insensitively).
pub fn ensure_root_prefix(check: &str) -> String {
    let cwd_root = working_dir_root();
    let roots = filesystem_roots();
    ensure_root_prefix_with(check, cwd_root.as_deref(), roots.as_slice())
}

/// [`ensure_root_prefix`] with the environment supplied by the caller.
///
/// `cwd_root` is prepended as-is, keeping its case. When it is `None` the host
/// separator is prepended instead and `roots` is not consulted.
pub fn ensure_root_prefix_with<S: AsRef<str>>(
    check: &str,
    cwd_root: Option<&str>,
    roots: &[S],
) -> String {
    let Some(cwd_root) = cwd_root else {
        return format!("{}{}", MAIN_SEPARATOR, check);
    };

    let lowered = check.to_lowercase();
    let rooted = roots
        .iter()
        .any(|root| lowered.starts_with(&root.as_ref().to_lowercase()));

    if rooted {
        check.to_string()
    } else {
        format!("{}{}", cwd_root, check)
    }
}

/// Root component of the absolute working directory (`/` or `C:\`).
pub fn working_dir_root() -> Option<String> {
    let cwd = std::env::current_dir().ok()?;
    let root: PathBuf = cwd
        .components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();

    if root.as_os_str().is_empty() {
        None
    } else {
        Some(root.to_string_lossy().into_owned())
    }
}

/// Filesystem roots of the host, in drive order.
pub fn filesystem_roots() -> Vec<String> {
    #[cfg(windows)]
    {
        (b'A'..=b'Z')
            .map(|letter| format!("{}:\\", letter as char))
            .filter(|root| std::path::Path::new(root).exists())
            .collect()
    }

    #[cfg(not(windows))]
    {
        vec![MAIN_SEPARATOR.to_string()]
    }
}
