//! Output formatting tests for generator results.

#[cfg(test)]
mod tests {
    use super::super::load::SkippedInput;
    use super::super::result::{FailedEntity, GenerateResult, GeneratedFile};
    use rstest::{fixture, rstest};

    const EMPTY_TABLE_OUTPUT: &str = "\
Generate (sql):
  No files generated.";

    const FULL_TABLE_OUTPUT: &str = "\
Generate (model):
  Files: 2  Entities: 3

  model/user.go (user)
  model/merged.go (post, tag)

Skipped inputs (1):
  bad.json: Failed to parse bad.json: EOF

Failed entities (1):
  2fa: 2fa: `2fa` is not a valid Go struct name";

    #[fixture]
    fn empty_result() -> GenerateResult {
        GenerateResult {
            command: "sql".into(),
            ..Default::default()
        }
    }

    #[fixture]
    fn full_result() -> GenerateResult {
        GenerateResult {
            command: "model".into(),
            files: vec![
                GeneratedFile {
                    path: "model/user.go".into(),
                    entities: vec!["user".into()],
                },
                GeneratedFile {
                    path: "model/merged.go".into(),
                    entities: vec!["post".into(), "tag".into()],
                },
            ],
            skipped_inputs: vec![SkippedInput {
                path: "bad.json".into(),
                error: "Failed to parse bad.json: EOF".into(),
            }],
            failed_entities: vec![FailedEntity {
                entity: "2fa".into(),
                error: "2fa: `2fa` is not a valid Go struct name".into(),
            }],
        }
    }

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: GenerateResult,
        expected: EMPTY_TABLE_OUTPUT,
    }

    crate::output_table_test! {
        test_name: test_to_table_full,
        fixture: full_result,
        fixture_type: GenerateResult,
        expected: FULL_TABLE_OUTPUT,
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: full_result,
        fixture_type: GenerateResult,
        assertions: {
            "command": "model",
            "files": serde_json::json!([
                {"path": "model/user.go", "entities": ["user"]},
                {"path": "model/merged.go", "entities": ["post", "tag"]}
            ]),
        },
    }

    crate::output_json_test! {
        test_name: test_format_json_omits_empty_lists,
        fixture: empty_result,
        fixture_type: GenerateResult,
        assertions: {
            "command": "sql",
            "skipped_inputs": serde_json::Value::Null,
            "failed_entities": serde_json::Value::Null,
        },
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: full_result,
        fixture_type: GenerateResult,
        contains: ["command: model", "model/user.go"],
    }

    #[rstest]
    fn test_entity_count(full_result: GenerateResult) {
        assert_eq!(full_result.entity_count(), 3);
    }
}
