use jnigen_lang_ast::Param;

use crate::ir;
use crate::result::BackendResult;
use crate::table::{BindingEntry, BindingTable};

use super::traits::{IrCtx, ToIR};

impl ToIR for BindingTable {
    type Target = ir::JavaFile<ir::TableClass>;

    fn to_ir(&self, ctx: &IrCtx) -> BackendResult<Self::Target> {
        let mut class = ir::TableClass::new(&ctx.config.table_class, ctx.config.testing_enabled);
        for entry in self.entries() {
            class.methods.push(entry.to_ir(ctx)?);
        }
        Ok(ir::JavaFile::new(&ctx.config.table_package, class))
    }
}

/// Input:
///
/// ```text
/// package p; class Foo { interface Natives { java.util.List bar(int x); } }
/// ```
///
/// Output:
///
/// ```java
/// /**
///  * p.Foo.bar
///  * @param x (int)
///  * @return (java.util.List)
///  */
/// public static final native java.lang.Object p_Foo_bar(int x);
/// ```
impl ToIR for BindingEntry {
    type Target = ir::NativeMethod;

    fn to_ir(&self, _ctx: &IrCtx) -> BackendResult<Self::Target> {
        let mut doc = vec![self.descriptor()];
        doc.extend(
            self.decl.params.iter().map(|Param { name, typ }| format!("@param {name} ({typ})")),
        );
        doc.push(format!("@return ({})", self.decl.ret));

        Ok(ir::NativeMethod {
            name: self.flat_name.clone(),
            params: self.params.clone(),
            ret: self.ret.clone(),
            doc,
        })
    }
}
