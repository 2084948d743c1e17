use std::error::Error;

use super::{DEFAULT_OUT, RapierCmd};
use crate::commands::generate::{self, GenerateResult, Layout, package_name};
use crate::commands::{Execute, RunContext};
use crate::emit::{Backend, RapierEmitter};

impl Execute for RapierCmd {
    type Output = GenerateResult;

    fn execute(self, ctx: &RunContext) -> Result<Self::Output, Box<dyn Error>> {
        let config = &ctx.config.rapier;
        let options = self.options.merge(&ctx.config.options);
        let out_dir = self.source.out_dir(config.out.as_ref(), DEFAULT_OUT);

        let backend = Backend::from(RapierEmitter {
            package_name: package_name(self.package.as_ref(), config.package.as_ref(), &out_dir),
            model_import_path: self
                .model_import_path
                .or_else(|| config.model_import_path.clone())
                .unwrap_or_default(),
            header: self.source.header(),
        });

        generate::run(
            "rapier",
            &self.source,
            &options,
            &ctx.registry,
            &backend,
            &out_dir,
            &Layout::PerEntity,
        )
    }
}
