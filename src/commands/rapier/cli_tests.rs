//! CLI parsing tests for rapier command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "rapier",
        test_name: test_requires_input,
        required_arg: "--input",
    }

    crate::cli_defaults_test! {
        command: "rapier",
        variant: Rapier,
        required_args: ["-i", "schema.json"],
        defaults: {
            package: None::<String>,
            model_import_path: None::<String>,
            source.disable_doc_comment: false,
        },
    }

    crate::cli_option_test! {
        command: "rapier",
        variant: Rapier,
        required_args: ["-i", "schema.json"],
        test_name: test_with_model_import_path,
        args: ["--model-import-path", "example.com/app/model"],
        field: model_import_path,
        expected: Some("example.com/app/model".to_string()),
    }

    crate::cli_option_test! {
        command: "rapier",
        variant: Rapier,
        required_args: ["-i", "schema.json"],
        test_name: test_with_escape_name,
        args: ["--escape-name", "Model"],
        field: options.escape_name,
        expected: vec!["Model".to_string()],
    }
}
