use jnigen_lang_ast::{InterfaceId, MethodDecl, Param};

use crate::ir;
use crate::naming::wrapper_class_name;
use crate::normalize::{NormalizeContext, normalize_type};
use crate::result::{BackendError, BackendResult};

use super::traits::{IrCtx, ToIR};

/// A validated natives interface waiting for its wrapper.
///
/// Wrappers are only lowered once the binding table is complete, since every forwarding method
/// needs the flat name of its table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperSource {
    pub id: InterfaceId,
    pub enclosing: String,
    pub is_public: bool,
    /// The methods to forward, in declaration order.
    pub methods: Vec<MethodDecl>,
}

impl ToIR for WrapperSource {
    type Target = ir::JavaFile<ir::WrapperClass>;

    fn to_ir(&self, ctx: &IrCtx) -> BackendResult<Self::Target> {
        let WrapperSource { id, enclosing, is_public, methods } = self;

        let methods = methods
            .iter()
            .map(|method| -> BackendResult<ir::ForwardingMethod> {
                let entry = ctx.table.lookup(id, &method.name).ok_or_else(|| {
                    BackendError::UnresolvedEntry {
                        interface: id.to_string(),
                        method: method.name.clone(),
                    }
                })?;
                let params = method
                    .params
                    .iter()
                    .map(|Param { name, typ }| Param {
                        name: name.clone(),
                        typ: normalize_type(typ, NormalizeContext::Wrapper),
                    })
                    .collect();
                Ok(ir::ForwardingMethod {
                    name: method.name.clone(),
                    params,
                    ret: normalize_type(&method.ret, NormalizeContext::Wrapper),
                    cast: entry.needs_cast(),
                    target: entry.flat_name.clone(),
                })
            })
            .collect::<BackendResult<Vec<_>>>()?;

        let class = ir::WrapperClass {
            name: wrapper_class_name(enclosing, &ctx.config.wrapper_suffix),
            is_public: *is_public,
            interface: format!("{enclosing}.{}", id.name),
            table_class: ctx.config.table_class.clone(),
            methods,
        };

        let mut file = ir::JavaFile::new(&id.package, class);
        if id.package != ctx.config.table_package {
            file.imports.push(ctx.config.table_class_qualified());
        }
        Ok(file)
    }
}
