//! CLI parsing tests for model command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;
    use std::path::PathBuf;

    // =========================================================================
    // Macro-generated tests (standard patterns)
    // =========================================================================

    crate::cli_required_arg_test! {
        command: "model",
        test_name: test_requires_input,
        required_arg: "--input",
    }

    crate::cli_defaults_test! {
        command: "model",
        variant: Model,
        required_args: ["-i", "schema.json"],
        defaults: {
            source.dialect: "mysql",
            source.out: None::<PathBuf>,
            source.keep_going: false,
            options.enable_int: false,
            package: None::<String>,
            merge: false,
        },
    }

    crate::cli_option_test! {
        command: "model",
        variant: Model,
        required_args: ["-i", "schema.json"],
        test_name: test_with_package,
        args: ["--package", "entity"],
        field: package,
        expected: Some("entity".to_string()),
    }

    crate::cli_option_test! {
        command: "model",
        variant: Model,
        required_args: ["-i", "schema.json"],
        test_name: test_with_dialect,
        args: ["-s", "tidb"],
        field: source.dialect,
        expected: "tidb",
    }

    crate::cli_option_test! {
        command: "model",
        variant: Model,
        required_args: ["-i", "schema.json"],
        test_name: test_with_tags,
        args: ["-K", "json=snakeCase", "--tags", "yaml=kebab"],
        field: options.tags,
        expected: vec![
            ("json".to_string(), "snakeCase".to_string()),
            ("yaml".to_string(), "kebab".to_string()),
        ],
    }

    crate::cli_option_test! {
        command: "model",
        variant: Model,
        required_args: [],
        test_name: test_with_multiple_inputs,
        args: ["-i", "a.json", "b.json"],
        field: source.input,
        expected: vec![PathBuf::from("a.json"), PathBuf::from("b.json")],
    }

    crate::cli_option_test! {
        command: "model",
        variant: Model,
        required_args: ["-i", "schema.json"],
        test_name: test_with_enable_integer_int,
        args: ["--enable-integer-int"],
        field: options.enable_integer_int,
        expected: true,
    }

    crate::cli_error_test! {
        command: "model",
        test_name: test_tag_without_style_rejected,
        args: ["-i", "schema.json", "--tags", "json"],
    }
}
