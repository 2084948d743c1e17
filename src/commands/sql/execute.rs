use std::error::Error;

use super::{DEFAULT_FILENAME, DEFAULT_OUT, SqlCmd};
use crate::commands::generate::{self, GenerateResult, Layout};
use crate::commands::{Execute, RunContext};
use crate::emit::{Backend, DdlEmitter};

impl Execute for SqlCmd {
    type Output = GenerateResult;

    fn execute(self, ctx: &RunContext) -> Result<Self::Output, Box<dyn Error>> {
        let config = &ctx.config.sql;
        let mut options = self.options.merge(&ctx.config.options);
        // DDL always carries the table's constraints
        options.enable_foreign_key = true;
        let out_dir = self.source.out_dir(config.out.as_ref(), DEFAULT_OUT);

        let layout = if self.merge || config.merge {
            Layout::Merged(
                self.filename
                    .or_else(|| config.filename.clone())
                    .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
            )
        } else {
            Layout::PerEntity
        };
        let backend = Backend::from(DdlEmitter::new(self.source.header()));

        generate::run("sql", &self.source, &options, &ctx.registry, &backend, &out_dir, &layout)
    }
}
