//! Lowering of manifest declarations into struct and field descriptors.

use std::collections::{HashMap, HashSet};

use eyre::{Result, bail, eyre};
use pdatagen_manifest::{FieldDef, FieldKind, FileDef, Manifest, StructDef, StructKind};
use tracing::debug;

use crate::{
    GoFile,
    fields::{
        Field, MessagePtrField, MessageValueField, OneofField, PrimitiveField,
        PrimitiveTypedField, SliceField,
    },
    structs::{MessagePtrStruct, MessageValueStruct, SliceStruct, Struct, StructRef},
};

/// Turn every `[[files]]` entry of `manifest` into a [`GoFile`].
///
/// Parsing already validates the manifest; lowering re-checks only what it
/// relies on (required keys and struct references), so a manifest assembled
/// in code fails with an error instead of producing broken Go.
///
/// A message field whose type leads back to its owner (directly, or through
/// slices and other messages) is lowered as a cyclic field, so the generated
/// `fillTest` helpers terminate.
pub fn lower(manifest: &Manifest) -> Result<Vec<GoFile>> {
    let catalog = Catalog::new(manifest);
    let package = manifest.package.name.get_ref();

    let files = manifest
        .files
        .iter()
        .map(|file| lower_file(package, file, &catalog))
        .collect::<Result<Vec<_>>>()?;

    let mut paths = HashSet::new();
    if let Some(path) = files.iter().map(GoFile::impl_file_name).find(|p| !paths.insert(p.clone())) {
        bail!("more than one file entry is generated into '{}'", path);
    }

    Ok(files)
}

/// Kind of every declared struct and the structs its fixtures fill.
struct Catalog<'a> {
    kinds: HashMap<&'a str, StructKind>,
    edges: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> Catalog<'a> {
    fn new(manifest: &'a Manifest) -> Self {
        let kinds = manifest.structs().map(|s| (s.name(), s.kind)).collect();
        let edges = manifest
            .structs()
            .map(|s| {
                let fields = s
                    .fields
                    .iter()
                    .filter(|f| f.kind.referenced_struct().is_some())
                    .filter_map(FieldDef::ty);
                let targets = s.element().into_iter().chain(fields).collect();
                (s.name(), targets)
            })
            .collect();
        Self { kinds, edges }
    }

    /// Whether filling `from` eventually fills `to` again.
    fn leads_to(&self, from: &str, to: &str) -> bool {
        let mut seen = HashSet::new();
        let mut stack = vec![from];
        while let Some(name) = stack.pop() {
            if name == to {
                return true;
            }
            if seen.insert(name) {
                stack.extend(self.edges.get(name).into_iter().flatten().copied());
            }
        }
        false
    }
}

fn lower_file(package: &str, file: &FileDef, catalog: &Catalog) -> Result<GoFile> {
    debug!(file = file.name(), structs = file.structs.len(), "lowering file");

    file.structs.iter().try_fold(
        GoFile::new(file.name(), package)
            .imports(file.imports.iter().cloned())
            .test_imports(file.test_imports.iter().cloned()),
        |go_file, def| Ok(go_file.add_struct(lower_struct(def, catalog)?)),
    )
}

fn lower_struct(def: &StructDef, catalog: &Catalog) -> Result<Struct> {
    let s: Struct = match def.kind {
        StructKind::Slice => {
            let element = def
                .element()
                .ok_or_else(|| eyre!("slice struct '{}' is missing 'element'", def.name()))?;
            let element = resolve(element, StructKind::MessagePtr, &catalog.kinds)?;
            SliceStruct::new(def.name(), element, def.origin()).into()
        }
        StructKind::MessagePtr => {
            let mut s = MessagePtrStruct::new(def.name(), def.origin());
            if let Some(description) = &def.description {
                s = s.description(description);
            }
            def.fields
                .iter()
                .try_fold(s, |s, f| {
                    let field = lower_field(def, f, &catalog.kinds)?;
                    Ok::<_, eyre::Report>(if is_cyclic(def, f, catalog) {
                        s.cyclic_field(field)
                    } else {
                        s.field(field)
                    })
                })?
                .into()
        }
        StructKind::MessageValue => {
            let mut s = MessageValueStruct::new(def.name(), def.origin());
            if let Some(description) = &def.description {
                s = s.description(description);
            }
            def.fields
                .iter()
                .try_fold(s, |s, f| {
                    let field = lower_field(def, f, &catalog.kinds)?;
                    Ok::<_, eyre::Report>(if is_cyclic(def, f, catalog) {
                        s.cyclic_field(field)
                    } else {
                        s.field(field)
                    })
                })?
                .into()
        }
    };

    debug!(name = def.name(), kind = s.kind(), fields = s.field_count(), "lowered struct");
    Ok(s)
}

fn is_cyclic(owner: &StructDef, def: &FieldDef, catalog: &Catalog) -> bool {
    match (def.kind.referenced_struct(), def.ty()) {
        (Some(_), Some(ty)) => catalog.leads_to(ty, owner.name()),
        _ => false,
    }
}

fn lower_field(
    owner: &StructDef,
    def: &FieldDef,
    kinds: &HashMap<&str, StructKind>,
) -> Result<Field> {
    let require = |value: Option<&str>, key: &str| {
        value.map(str::to_string).ok_or_else(|| {
            eyre!(
                "{} field '{}.{}' is missing '{}'",
                def.kind,
                owner.name(),
                def.name(),
                key
            )
        })
    };
    let name = || require(def.name.as_ref().map(|n| n.get_ref().as_str()), "name");
    let ty = || require(def.ty(), "type");
    let default = || require(def.default.as_deref(), "default");
    let test_value = || require(def.test_value.as_deref(), "test_value");

    let field: Field = match def.kind {
        FieldKind::Primitive => {
            PrimitiveField::new(name()?, def.origin(), ty()?, default()?, test_value()?).into()
        }
        FieldKind::TypedPrimitive => PrimitiveTypedField::new(
            name()?,
            def.origin(),
            ty()?,
            require(def.raw_type.as_deref(), "raw_type")?,
            default()?,
            test_value()?,
        )
        .manual_setter_if(def.manual_setter)
        .into(),
        FieldKind::MessagePtr => {
            let returns = resolve(&ty()?, StructKind::MessagePtr, kinds)?;
            MessagePtrField::new(name()?, def.origin(), returns).into()
        }
        FieldKind::MessageValue => {
            let returns = resolve(&ty()?, StructKind::MessageValue, kinds)?;
            MessageValueField::new(name()?, def.origin(), returns).into()
        }
        FieldKind::Slice => {
            let returns = resolve(&ty()?, StructKind::Slice, kinds)?;
            SliceField::new(name()?, def.origin(), returns).into()
        }
        FieldKind::Oneof => OneofField::new(
            require(def.copy_func.as_deref(), "copy_func")?,
            def.origin(),
            test_value()?,
            require(def.fill_test.as_deref(), "fill_test")?,
        )
        .into(),
    };

    Ok(field)
}

fn resolve(name: &str, expected: StructKind, kinds: &HashMap<&str, StructKind>) -> Result<StructRef> {
    match kinds.get(name) {
        None => bail!("unknown struct '{}'", name),
        Some(found) if *found != expected => {
            bail!("struct '{}' is a {} struct, expected {}", name, found, expected)
        }
        Some(_) => Ok(StructRef::new(name)),
    }
}
