use std::error::Error;

use super::{DEFAULT_FILENAME, DEFAULT_OUT, ModelCmd};
use crate::commands::generate::{self, GenerateResult, Layout, package_name};
use crate::commands::{Execute, RunContext};
use crate::emit::{Backend, GoStructEmitter};

impl Execute for ModelCmd {
    type Output = GenerateResult;

    fn execute(self, ctx: &RunContext) -> Result<Self::Output, Box<dyn Error>> {
        let config = &ctx.config.model;
        let options = self.options.merge(&ctx.config.options);
        let out_dir = self.source.out_dir(config.out.as_ref(), DEFAULT_OUT);
        let package = package_name(self.package.as_ref(), config.package.as_ref(), &out_dir);

        let layout = if self.merge || config.merge {
            Layout::Merged(
                self.filename
                    .or_else(|| config.filename.clone())
                    .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
            )
        } else {
            Layout::PerEntity
        };
        let backend = Backend::from(GoStructEmitter::new(&package, self.source.header()));

        generate::run("model", &self.source, &options, &ctx.registry, &backend, &out_dir, &layout)
    }
}
