//! Parsley language support for the [tree-sitter][] parsing library.
//!
//! The grammar itself is compiled separately into a parser artifact that
//! defines the `tree_sitter_parsley` constructor. This crate is the binding
//! layer on top of it: it wraps the language handle the constructor returns
//! and publishes the surface a host loader expects, which is the grammar
//! name, the wrapped handle, and the metadata shipped alongside the parser.
//!
//! Use [`LANGUAGE`] to add this language to a tree-sitter
//! [Parser](https://docs.rs/tree-sitter/*/tree_sitter/struct.Parser.html).
//!
//! [tree-sitter]: https://tree-sitter.github.io/

use thiserror::Error;
use tree_sitter_language::LanguageFn;

extern "C" {
    fn tree_sitter_parsley() -> *const ();
}

/// Canonical name of the grammar, as declared in `grammar.js`.
pub const GRAMMAR_NAME: &str = "parsley";

/// The tree-sitter [`LanguageFn`] for Parsley.
///
/// [LanguageFn]: https://docs.rs/tree-sitter-language/*/tree_sitter_language/struct.LanguageFn.html
pub const LANGUAGE: LanguageFn = unsafe { LanguageFn::from_raw(tree_sitter_parsley) };

/// The tree-sitter node types as JSON.
pub const NODE_TYPES: &str = include_str!("node-types.json");

/// The content of the [`queries/highlights.scm`][] file.
pub const HIGHLIGHTS_QUERY: &str = include_str!("../queries/highlights.scm");

/// Errors raised while building the module export record.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModuleError {
    #[error("grammar constructor returned a null language pointer")]
    NullLanguage,
}

/// Opaque handle to the compiled grammar data.
///
/// The pointee is produced by the generated parser, lives in static storage
/// for the lifetime of the process, and is never dereferenced or freed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageHandle(*const ());

// The grammar data is immutable and process-static.
unsafe impl Send for LanguageHandle {}
unsafe impl Sync for LanguageHandle {}

impl LanguageHandle {
    /// Releases the raw grammar pointer, for hosts that pass the language
    /// across another ABI boundary.
    pub fn as_ptr(self) -> *const () {
        self.0
    }
}

/// What a host loader receives when this module initializes: the grammar
/// name and the wrapped language handle, nothing else.
#[derive(Debug, Clone, Copy)]
pub struct ModuleExports {
    pub name: &'static str,
    pub language: LanguageHandle,
}

impl ModuleExports {
    /// Initializes the module: invokes the grammar constructor once, wraps
    /// the handle it returns, and pairs it with [`GRAMMAR_NAME`].
    ///
    /// The constructor returns the same process-static data on every call,
    /// so repeated loads yield records with pointer-identical handles.
    pub fn load() -> Result<Self, ModuleError> {
        Self::from_raw(unsafe { tree_sitter_parsley() })
    }

    fn from_raw(raw: *const ()) -> Result<Self, ModuleError> {
        if raw.is_null() {
            return Err(ModuleError::NullLanguage);
        }
        Ok(Self {
            name: GRAMMAR_NAME,
            language: LanguageHandle(raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_language_pointer_is_rejected() {
        assert_eq!(
            ModuleExports::from_raw(std::ptr::null()).unwrap_err(),
            ModuleError::NullLanguage
        );
    }

    #[test]
    fn wrapped_handle_preserves_the_raw_pointer() {
        let marker = 0u32;
        let raw = (&marker as *const u32).cast::<()>();
        let exports = ModuleExports::from_raw(raw).unwrap();
        assert_eq!(exports.name, GRAMMAR_NAME);
        assert_eq!(exports.language.as_ptr(), raw);
    }
}
