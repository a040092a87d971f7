use crate::config::GeneratorConfig;
use crate::result::BackendResult;
use crate::table::BindingTable;

/// Everything lowering can look at. Only exists once the binding table is complete.
pub struct IrCtx<'a> {
    pub config: &'a GeneratorConfig,
    pub table: &'a BindingTable,
}

/// Convert a part of the binding table to IR (intermediate representation)
pub trait ToIR {
    type Target;

    fn to_ir(&self, ctx: &IrCtx) -> BackendResult<Self::Target>;
}

impl<T: ToIR> ToIR for Vec<T> {
    type Target = Vec<T::Target>;

    fn to_ir(&self, ctx: &IrCtx) -> BackendResult<Self::Target> {
        self.iter().map(|x| x.to_ir(ctx)).collect()
    }
}
