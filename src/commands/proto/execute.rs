use std::error::Error;

use super::{DEFAULT_OUT, ProtoCmd};
use crate::commands::generate::{self, GenerateResult, Layout, package_name};
use crate::commands::{Execute, RunContext};
use crate::emit::{Backend, ProtoEmitter};
use crate::utils::NamingStyle;

impl Execute for ProtoCmd {
    type Output = GenerateResult;

    fn execute(self, ctx: &RunContext) -> Result<Self::Output, Box<dyn Error>> {
        let config = &ctx.config.proto;
        let options = self.options.merge(&ctx.config.options);
        let out_dir = self.source.out_dir(config.out.as_ref(), DEFAULT_OUT);
        let package = package_name(self.package.as_ref(), config.package.as_ref(), &out_dir);

        let style = match self.style.as_ref().or(config.style.as_ref()) {
            Some(s) => Some(
                NamingStyle::parse(s).ok_or_else(|| format!("Unknown naming style: {}", s))?,
            ),
            None => None,
        };
        let mut file_options = config.options.clone();
        file_options.extend(self.file_options);

        let backend = Backend::from(ProtoEmitter {
            package_name: package,
            options: file_options,
            style,
            disable_bool: self.disable_bool || config.disable_bool,
            disable_timestamp: self.disable_timestamp || config.disable_timestamp,
            header: self.source.header(),
        });

        generate::run(
            "proto",
            &self.source,
            &options,
            &ctx.registry,
            &backend,
            &out_dir,
            &Layout::PerEntity,
        )
    }
}
