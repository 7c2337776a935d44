use crate::error::{ErrorType, Result, ScopeError};
use std::path::Path;
use tree_sitter::Language;

/// A bundled grammar and the name its scopes are suffixed with
pub struct LoadedLanguage {
    pub language: Language,
    pub name: String,
}

impl LoadedLanguage {
    #[allow(dead_code)]
    fn bundled(language: Language, name: &str) -> Self {
        Self {
            language,
            name: name.to_string(),
        }
    }
}

/// Grammar name for a file, based on its extension
pub fn language_for_file(path: &Path) -> Result<&'static str> {
    let extension = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
        ScopeError::new(ErrorType::Syntax, "NO_EXTENSION", "File has no extension")
    })?;

    let lang_name = match extension {
        "rs" => "rust",
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" => "cpp",
        "py" | "pyi" => "python",
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "java" => "java",
        _ => {
            return Err(ScopeError::new(
                ErrorType::Syntax,
                "UNKNOWN_EXTENSION",
                format!("Unknown extension: {}", extension),
            ))
        }
    };
    Ok(lang_name)
}

/// Load a bundled grammar by name (e.g., "rust")
#[allow(unused_variables)]
pub fn load_language(lang_name: &str) -> Result<LoadedLanguage> {
    #[cfg(feature = "treesitter")]
    {
        let language: Option<Language> = match lang_name {
            "rust" => Some(tree_sitter_rust::LANGUAGE.into()),
            "python" => Some(tree_sitter_python::LANGUAGE.into()),
            "c" => Some(tree_sitter_c::LANGUAGE.into()),
            "cpp" => Some(tree_sitter_cpp::LANGUAGE.into()),
            "javascript" => Some(tree_sitter_javascript::LANGUAGE.into()),
            "java" => Some(tree_sitter_java::LANGUAGE.into()),
            _ => None,
        };
        if let Some(language) = language {
            return Ok(LoadedLanguage::bundled(language, lang_name));
        }
    }

    Err(ScopeError::new(
        ErrorType::Syntax,
        "LANGUAGE_NOT_FOUND",
        format!("Language {} not found or feature not enabled", lang_name),
    ))
}
