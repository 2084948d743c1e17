//! Shared plumbing for the generator commands: common arguments, schema
//! loading and artifact writing.

mod load;
mod output;
mod output_tests;
mod result;
mod write;

pub use load::{LoadError, LoadedSchema, SkippedInput, filter_tables, load_facts, load_schema, read_facts};
pub use result::{FailedEntity, GenerateResult, GeneratedFile};
pub use write::{Layout, generate, join_filename, write_file};

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::dialect::MYSQL;
use crate::emit::{Backend, Header};
use crate::schema::Options;
use crate::utils::pkg_name;

/// Parse a `key=value` pair.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{}`", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in `{}`", s));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Where the schema comes from and where artifacts go.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Schema facts JSON file(s)
    #[arg(short, long = "input", required = true, num_args = 1..)]
    pub input: Vec<PathBuf>,
    /// Dialect the column types are written in
    #[arg(short = 's', long, default_value = MYSQL)]
    pub dialect: String,
    /// Only these tables (repeatable)
    #[arg(short, long = "table")]
    pub table: Vec<String>,
    /// Skip tables whose name matches this regex (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,
    /// Output directory
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Order tables by name instead of input order
    #[arg(long, default_value_t = false)]
    pub sort: bool,
    /// Keep emitting remaining entities when one fails
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,
    /// Leave the "Code generated" header off
    #[arg(long, default_value_t = false)]
    pub disable_doc_comment: bool,
}

impl SourceArgs {
    /// `--out`, else the configured directory, else `default`.
    pub fn out_dir(&self, configured: Option<&PathBuf>, default: &str) -> PathBuf {
        self.out
            .clone()
            .or_else(|| configured.cloned())
            .unwrap_or_else(|| PathBuf::from(default))
    }

    pub fn header(&self) -> Header {
        if self.disable_doc_comment {
            Header::disabled()
        } else {
            Header::default()
        }
    }
}

/// Flags feeding the field transformation pipeline.
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Tag name and naming style, e.g. `json=snakeCase`; an empty style drops the tag
    #[arg(short = 'K', long = "tags", value_parser = parse_key_value)]
    pub tags: Vec<(String, String)>,
    /// Widen 8/16/32-bit integers to int/uint
    #[arg(long, default_value_t = false)]
    pub enable_int: bool,
    /// Widen only 32-bit integers to int/uint
    #[arg(long, default_value_t = false)]
    pub enable_integer_int: bool,
    /// Render bool columns as int
    #[arg(long, default_value_t = false)]
    pub enable_bool_int: bool,
    /// Use sql.Null* wrappers instead of pointers for nullable columns
    #[arg(long, default_value_t = false)]
    pub disable_null_to_point: bool,
    /// Attach foreign keys
    #[arg(long, default_value_t = false)]
    pub enable_foreign_key: bool,
    /// Leave `,omitempty` off synthesized tags
    #[arg(long, default_value_t = false)]
    pub ignore_omitempty: bool,
    /// Leave `comment:` out of the gorm tag
    #[arg(long, default_value_t = false)]
    pub disable_comment_tag: bool,
    /// Extra field names to escape (repeatable)
    #[arg(long)]
    pub escape_name: Vec<String>,
}

impl OptionArgs {
    /// Overlay the command line on configured options. Flags only switch on.
    pub fn merge(&self, base: &Options) -> Options {
        let mut options = base.clone();
        options.enable_int |= self.enable_int;
        options.enable_integer_int |= self.enable_integer_int;
        options.enable_bool_int |= self.enable_bool_int;
        options.disable_null_to_point |= self.disable_null_to_point;
        options.enable_foreign_key |= self.enable_foreign_key;
        options.ignore_omitempty |= self.ignore_omitempty;
        options.disable_comment_tag |= self.disable_comment_tag;
        for (tag, style) in &self.tags {
            if style.is_empty() {
                options.tags.remove(tag);
            } else {
                options.tags.insert(tag.clone(), style.clone());
            }
        }
        for name in &self.escape_name {
            if !options.escape_name.contains(name) {
                options.escape_name.push(name.clone());
            }
        }
        options
    }
}

/// Package name: explicit, else configured, else derived from the output directory.
pub fn package_name(explicit: Option<&String>, configured: Option<&String>, out_dir: &Path) -> String {
    explicit
        .or(configured)
        .cloned()
        .unwrap_or_else(|| pkg_name(&out_dir.to_string_lossy()))
}

/// Load the schema named by `source` and write it through `backend`.
pub fn run(
    command: &str,
    source: &SourceArgs,
    options: &Options,
    registry: &crate::dialect::DialectRegistry,
    backend: &Backend,
    out_dir: &Path,
    layout: &Layout,
) -> Result<GenerateResult, Box<dyn Error>> {
    let loaded = load_schema(
        &source.input,
        &source.dialect,
        &source.table,
        &source.exclude,
        source.sort,
        registry,
        options,
    )?;
    generate(command, backend, loaded, out_dir, layout, source.keep_going)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("json=snakeCase", Ok(("json".to_string(), "snakeCase".to_string())))]
    #[case(" yaml = kebab ", Ok(("yaml".to_string(), "kebab".to_string())))]
    #[case("json=", Ok(("json".to_string(), String::new())))]
    #[case("json", Err(()))]
    #[case("=snakeCase", Err(()))]
    fn test_parse_key_value(#[case] input: &str, #[case] expected: Result<(String, String), ()>) {
        assert_eq!(parse_key_value(input).map_err(|_| ()), expected);
    }

    #[rstest]
    fn test_merge_overlays_flags_and_tags() {
        let base = Options {
            enable_foreign_key: true,
            escape_name: vec!["Model".into()],
            ..Options::default()
        };
        let args = OptionArgs {
            tags: vec![
                ("json".into(), String::new()),
                ("yaml".into(), "snakeCase".into()),
            ],
            enable_int: true,
            escape_name: vec!["Model".into(), "Schema".into()],
            ..OptionArgs::default()
        };
        let merged = args.merge(&base);

        assert!(merged.enable_int);
        assert!(merged.enable_foreign_key);
        assert!(!merged.tags.contains_key("json"));
        assert_eq!(merged.tags.get("yaml").map(String::as_str), Some("snakeCase"));
        assert_eq!(merged.escape_name, vec!["Model", "Schema"]);
    }

    #[rstest]
    #[case(Some("entity"), None, "./model", "entity")]
    #[case(None, Some("dao"), "./model", "dao")]
    #[case(None, None, "out/my-repo", "my_repo")]
    fn test_package_name(
        #[case] explicit: Option<&str>,
        #[case] configured: Option<&str>,
        #[case] out: &str,
        #[case] expected: &str,
    ) {
        let explicit = explicit.map(String::from);
        let configured = configured.map(String::from);
        assert_eq!(
            package_name(explicit.as_ref(), configured.as_ref(), Path::new(out)),
            expected
        );
    }
}
