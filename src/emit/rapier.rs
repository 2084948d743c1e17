//! Query-builder ("rapier") field descriptor emitter.
//!
//! Generates, per entity, a `<Struct>_Native` type holding one typed column
//! accessor per field, plus constructors and helpers the query layer calls.

use super::{EmitError, Emitter, Header};
use crate::schema::resolve::resolve_names;
use crate::schema::{EntityDescriptor, FieldDescriptor};
use crate::utils::{is_go_identifier, pkg_name};

pub const RAPIER_IMPORT: &str = "github.com/thinkgos/gorm-rapier";
const GORM_IMPORT: &str = "gorm.io/gorm";

/// Members and methods of `<Struct>_Native`; column accessors must avoid them.
const NATIVE_MEMBERS: &[&str] = &[
    "xAlias",
    "ALL",
    "As",
    "X_Alias",
    "TableName",
    "New_Executor",
    "Select_Expr",
    "Select_VariantExpr",
];

#[derive(Debug, Clone)]
pub struct RapierEmitter {
    pub package_name: String,
    /// Import path of the package holding the model structs
    pub model_import_path: String,
    pub header: Header,
}

impl Default for RapierEmitter {
    fn default() -> Self {
        Self {
            package_name: "repository".to_string(),
            model_import_path: String::new(),
            header: Header::default(),
        }
    }
}

fn const_field(struct_name: &str, field_name: &str) -> String {
    format!("xx_{}_{}", struct_name, field_name)
}

fn select_variant_field(field: &FieldDescriptor, with_prefix: bool) -> String {
    let mut expr = format!("x.{}", field.go_name);
    if field.kind().is_time() {
        expr.push_str(".UnixTimestamp()");
        if field.nullable {
            expr.push_str(".IfNull(0)");
        }
        if !with_prefix {
            expr.push_str(&format!(".As(x.{}.ColumnName())", field.go_name));
        }
    }
    if with_prefix {
        expr.push_str(&format!(".As(x.{}.FieldName(prefixes...))", field.go_name));
    }
    expr.push(',');
    expr
}

impl RapierEmitter {
    fn model_qualifier(&self) -> String {
        if self.model_import_path.is_empty() {
            String::new()
        } else {
            format!("{}.", pkg_name(&self.model_import_path))
        }
    }

    fn render_entity(&self, entity: &EntityDescriptor) -> Result<String, EmitError> {
        let mut entity = entity.clone();
        resolve_names(&mut entity, NATIVE_MEMBERS);
        let entity = &entity;
        let struct_name = entity.struct_name();
        if !is_go_identifier(&struct_name) {
            return Err(EmitError::invalid(
                &entity.name,
                format!("`{}` is not a valid Go identifier", struct_name),
            ));
        }
        let table_name = &entity.name;
        let const_table = format!("xx_{}_TableName", struct_name);
        let var_model = format!("xxx_{}_Model", struct_name);
        let inner_new = format!("new_{}", struct_name);
        let native = format!("{}_Native", struct_name);
        let model_name = format!("{}{}", self.model_qualifier(), struct_name);

        let mut g = Vec::new();

        g.push("const (".to_string());
        g.push(format!("\t// hold model `{}` table name", struct_name));
        g.push(format!("\t{} = \"{}\"", const_table, table_name));
        g.push(format!("\t// hold model `{}` column name", struct_name));
        for field in &entity.fields {
            g.push(format!(
                "\t{} = \"{}\"",
                const_field(&struct_name, &field.go_name),
                field.name
            ));
        }
        g.push(")".to_string());
        g.push(String::new());

        g.push(format!("var {} = {}({})", var_model, inner_new, const_table));
        g.push(String::new());

        g.push(format!("type {} struct {{", native));
        g.push("\txAlias string".to_string());
        g.push("\tALL    rapier.Asterisk".to_string());
        for field in &entity.fields {
            g.push(format!("\t{} rapier.{}", field.go_name, field.rapier_kind.as_str()));
        }
        g.push("}".to_string());
        g.push(String::new());

        g.push(format!("// X_{} model with TableName `{}`.", struct_name, table_name));
        g.push(format!("func X_{}() {} {{", struct_name, native));
        g.push(format!("\treturn {}", var_model));
        g.push("}".to_string());
        g.push(String::new());

        g.push(format!("func {}(xAlias string) {} {{", inner_new, native));
        g.push(format!("\treturn {}{{", native));
        g.push("\t\txAlias: xAlias,".to_string());
        g.push("\t\tALL:    rapier.NewAsterisk(xAlias),".to_string());
        for field in &entity.fields {
            g.push(format!(
                "\t\t{}: rapier.New{}(xAlias, {}),",
                field.go_name,
                field.rapier_kind.as_str(),
                const_field(&struct_name, &field.go_name)
            ));
        }
        g.push("\t}".to_string());
        g.push("}".to_string());
        g.push(String::new());

        g.push(format!("// New_{} new instance.", struct_name));
        g.push(format!("func New_{}(xAlias string) {} {{", struct_name, native));
        g.push(format!("\tif xAlias == {} {{", const_table));
        g.push(format!("\t\treturn {}", var_model));
        g.push("\t} else {".to_string());
        g.push(format!("\t\treturn {}(xAlias)", inner_new));
        g.push("\t}".to_string());
        g.push("}".to_string());
        g.push(String::new());

        g.push("// As alias".to_string());
        g.push(format!("func (*{0}) As(alias string) {0} {{", native));
        g.push(format!("\treturn New_{}(alias)", struct_name));
        g.push("}".to_string());
        g.push(String::new());

        g.push(format!(
            "// X_Alias hold table name when call New_{0} or {0}_Native.As that you defined.",
            struct_name
        ));
        g.push(format!("func (x *{}) X_Alias() string {{", native));
        g.push("\treturn x.xAlias".to_string());
        g.push("}".to_string());
        g.push(String::new());

        g.push(format!(
            "// TableName hold model `{}` table name returns `{}`.",
            struct_name, table_name
        ));
        g.push(format!("func (*{}) TableName() string {{", native));
        g.push(format!("\treturn {}", const_table));
        g.push("}".to_string());
        g.push(String::new());

        g.push("// New_Executor new entity executor which suggest use only once.".to_string());
        g.push(format!(
            "func (*{}) New_Executor(db *gorm.DB) *rapier.Executor[{}] {{",
            native, model_name
        ));
        g.push(format!("\treturn rapier.NewExecutor[{}](db)", model_name));
        g.push("}".to_string());
        g.push(String::new());

        g.push("// Select_Expr select model fields".to_string());
        g.push(format!("func (x *{}) Select_Expr() []rapier.Expr {{", native));
        g.push("\treturn []rapier.Expr{".to_string());
        for field in &entity.fields {
            g.push(format!("\t\tx.{},", field.go_name));
        }
        g.push("\t}".to_string());
        g.push("}".to_string());
        g.push(String::new());

        g.push(
            "// Select_VariantExpr select model fields, but time.Time field convert to timestamp(int64)."
                .to_string(),
        );
        g.push(format!(
            "func (x *{}) Select_VariantExpr(prefixes ...string) []rapier.Expr {{",
            native
        ));
        g.push("\tif len(prefixes) > 0 && prefixes[0] != \"\" {".to_string());
        g.push("\t\treturn []rapier.Expr{".to_string());
        for field in &entity.fields {
            g.push(format!("\t\t\t{}", select_variant_field(field, true)));
        }
        g.push("\t\t}".to_string());
        g.push("\t} else {".to_string());
        g.push("\t\treturn []rapier.Expr{".to_string());
        for field in &entity.fields {
            g.push(format!("\t\t\t{}", select_variant_field(field, false)));
        }
        g.push("\t\t}".to_string());
        g.push("\t}".to_string());
        g.push("}".to_string());
        g.push(String::new());

        Ok(g.join("\n"))
    }
}

impl Emitter for RapierEmitter {
    fn emit(&self, entities: &[EntityDescriptor]) -> Result<String, EmitError> {
        let bodies = entities
            .iter()
            .map(|e| self.render_entity(e))
            .collect::<Result<Vec<_>, _>>()?;

        let mut out = self.header.render("//");
        out.push_str(&format!("package {}\n\n", self.package_name));
        out.push_str("import (\n");
        if !self.model_import_path.is_empty() {
            out.push_str(&format!("\t\"{}\"\n\n", self.model_import_path));
        }
        out.push_str(&format!("\trapier \"{}\"\n", RAPIER_IMPORT));
        out.push_str(&format!("\t\"{}\"\n", GORM_IMPORT));
        out.push_str(")\n\n");
        out.push_str(&bodies.join(""));
        Ok(out)
    }

    fn suffix(&self) -> &'static str {
        ".rapier.gen.go"
    }
}
