//! Capture queries mapping grammar nodes to scope names
//!
//! Every capture name is a scope; the annotator appends the language suffix.

const PYTHON: &str = r#"
(function_definition) @meta.function
(class_definition) @meta.class
(decorator) @meta.annotation
(comment) @comment.line
(string) @string
"#;

const RUST: &str = r#"
(function_item) @meta.function
(struct_item) @meta.struct
(enum_item) @meta.enum
(impl_item) @meta.impl
(trait_item) @meta.trait
(attribute_item) @meta.annotation
(visibility_modifier) @storage.modifier
(block "}" @punctuation.section.block.end)
(declaration_list "}" @punctuation.section.block.end)
(field_declaration_list "}" @punctuation.section.block.end)
(enum_variant_list "}" @punctuation.section.block.end)
(line_comment) @comment.line
(block_comment) @comment.block
(string_literal) @string
(raw_string_literal) @string
"#;

const C: &str = r#"
(function_definition) @meta.function
(struct_specifier body: (field_declaration_list)) @meta.struct
(enum_specifier body: (enumerator_list)) @meta.enum
(storage_class_specifier) @storage.modifier
(compound_statement "}" @punctuation.section.block.end)
(field_declaration_list "}" @punctuation.section.block.end)
(enumerator_list "}" @punctuation.section.block.end)
(comment) @comment
(string_literal) @string
"#;

const CPP: &str = r#"
(function_definition) @meta.function
(class_specifier body: (field_declaration_list)) @meta.class
(struct_specifier body: (field_declaration_list)) @meta.struct
(enum_specifier body: (enumerator_list)) @meta.enum
(template_declaration) @meta.template
(storage_class_specifier) @storage.modifier
(compound_statement "}" @punctuation.section.block.end)
(field_declaration_list "}" @punctuation.section.block.end)
(enumerator_list "}" @punctuation.section.block.end)
(comment) @comment
(string_literal) @string
(raw_string_literal) @string
"#;

const JAVASCRIPT: &str = r#"
(function_declaration) @meta.function
(method_definition) @meta.method
(class_declaration) @meta.class
(statement_block "}" @punctuation.section.block.end)
(class_body "}" @punctuation.section.block.end)
(comment) @comment
(string) @string
(template_string) @string
"#;

const JAVA: &str = r#"
(method_declaration) @meta.method
(constructor_declaration) @meta.method
(class_declaration) @meta.class
(interface_declaration) @meta.class
(enum_declaration) @meta.enum
(block "}" @punctuation.section.block.end)
(constructor_body "}" @punctuation.section.block.end)
(class_body "}" @punctuation.section.block.end)
(interface_body "}" @punctuation.section.block.end)
(enum_body "}" @punctuation.section.block.end)
(line_comment) @comment.line
(block_comment) @comment.block
(string_literal) @string
"#;

/// Query source and scope suffix for a grammar name
pub fn for_language(name: &str) -> Option<(&'static str, &'static str)> {
    let entry = match name {
        "python" => (PYTHON, "python"),
        "rust" => (RUST, "rust"),
        "c" => (C, "c"),
        "cpp" => (CPP, "c++"),
        "javascript" => (JAVASCRIPT, "js"),
        "java" => (JAVA, "java"),
        _ => return None,
    };
    Some(entry)
}
