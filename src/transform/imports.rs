//! Making the template helper available in the rewritten module.

use rustc_hash::FxHashSet;
use swc_core::ecma::ast::{
    Decl, DefaultDecl, ImportDecl, ImportSpecifier, Module, ModuleDecl, ModuleExportName,
    ModuleItem, Stmt,
};
use tracing::debug;

use super::lower::str_value;
use crate::builder::{NodeBuilder, SwcBuilder, pat_bindings};
use crate::template::HelperImports;

/// Named imports from one source module, plus the ones still to be added.
#[derive(Debug, Default)]
pub struct ModuleImports {
    source: String,
    /// `(exported, local)` pairs usable from the source, in binding order.
    bound: Vec<(String, String)>,
    /// Top-level names of the module plus every alias handed out.
    taken: FxHashSet<String>,
    /// `(exported, local)` pairs requested but not imported yet.
    pending: Vec<(String, String)>,
}

impl ModuleImports {
    /// Imports with nothing bound yet, for programs that cannot be scanned.
    pub fn detached(source: &str) -> Self {
        Self {
            source: source.to_string(),
            ..Self::default()
        }
    }

    /// Records the top-level bindings of `module` and the named imports it
    /// already has from `source`.
    pub fn scan(module: &Module, source: &str) -> Self {
        let mut imports = Self::detached(source);
        imports.taken = top_level_bindings(module);

        for decl in import_decls(module) {
            if decl.type_only || str_value(&decl.src) != source {
                continue;
            }

            for specifier in &decl.specifiers {
                let ImportSpecifier::Named(named) = specifier else {
                    continue;
                };
                if named.is_type_only {
                    continue;
                }

                let local = named.local.sym.to_string();
                let exported = match &named.imported {
                    Some(ModuleExportName::Ident(ident)) => ident.sym.to_string(),
                    Some(ModuleExportName::Str(s)) => str_value(s),
                    None => local.clone(),
                };
                imports.bound.push((exported, local));
            }
        }

        imports
    }

    pub fn pending(&self) -> &[(String, String)] {
        &self.pending
    }

    /// Local bound to `exported` that none of `shadowed` hides.
    fn local(&self, exported: &str, shadowed: &[String]) -> Option<&str> {
        self.bound
            .iter()
            .find(|(name, local)| name == exported && !shadowed.contains(local))
            .map(|(_, local)| local.as_str())
    }

    /// `name` if it is free, otherwise the first free `_name`, `_name2`, ….
    fn fresh_local(&self, name: &str, shadowed: &[String]) -> String {
        let is_free =
            |candidate: &String| !self.taken.contains(candidate) && !shadowed.contains(candidate);

        let plain = name.to_string();
        if is_free(&plain) {
            return plain;
        }

        (1..)
            .map(|n| if n == 1 { format!("_{name}") } else { format!("_{name}{n}") })
            .find(is_free)
            .unwrap_or(plain)
    }

    /// Adds the pending specifiers to `module` and returns how many were
    /// added.
    ///
    /// Specifiers join the first value import from the source that can take
    /// named specifiers; otherwise a new declaration goes to the top of the
    /// module.
    pub fn apply(self, module: &mut Module, builder: &SwcBuilder) -> usize {
        let Self {
            source, pending, ..
        } = self;
        let Some(((first_exported, first_local), rest)) = pending.split_first() else {
            return 0;
        };

        let target = module.body.iter_mut().find_map(|item| match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) if accepts_named(&*decl, &source) => {
                Some(decl)
            }
            _ => None,
        });

        match target {
            Some(decl) => {
                decl.specifiers.extend(
                    pending
                        .iter()
                        .map(|(exported, local)| builder.make_import_specifier(exported, local)),
                );
            }
            None => {
                let mut decl = builder.make_import(&source, first_exported, first_local);
                decl.specifiers.extend(
                    rest.iter()
                        .map(|(exported, local)| builder.make_import_specifier(exported, local)),
                );
                module
                    .body
                    .insert(0, ModuleItem::ModuleDecl(ModuleDecl::Import(decl)));
            }
        }

        debug!(source = %source, specifiers = ?pending, "added helper imports");
        pending.len()
    }
}

impl HelperImports for ModuleImports {
    fn ensure_import(&mut self, exported_name: &str, shadowed: &[String]) -> String {
        if let Some(local) = self.local(exported_name, shadowed) {
            return local.to_string();
        }

        let local = self.fresh_local(exported_name, shadowed);
        if local != exported_name {
            debug!(exported = exported_name, local = %local, "helper name is taken, aliasing");
        }

        self.taken.insert(local.clone());
        self.bound.push((exported_name.to_string(), local.clone()));
        self.pending.push((exported_name.to_string(), local.clone()));
        local
    }
}

fn import_decls(module: &Module) -> impl Iterator<Item = &ImportDecl> {
    module.body.iter().filter_map(|item| match item {
        ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) => Some(decl),
        _ => None,
    })
}

/// Names declared at the top level of `module`: import locals from any
/// source and variable, function and class declarations.
fn top_level_bindings(module: &Module) -> FxHashSet<String> {
    let mut names = Vec::new();

    for item in &module.body {
        match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) => {
                for specifier in &decl.specifiers {
                    let local = match specifier {
                        ImportSpecifier::Named(named) => &named.local,
                        ImportSpecifier::Default(default) => &default.local,
                        ImportSpecifier::Namespace(namespace) => &namespace.local,
                    };
                    names.push(local.sym.to_string());
                }
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                decl_bindings(&export.decl, &mut names);
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => {
                let ident = match &export.decl {
                    DefaultDecl::Class(class) => class.ident.as_ref(),
                    DefaultDecl::Fn(function) => function.ident.as_ref(),
                    DefaultDecl::TsInterfaceDecl(_) => None,
                };
                names.extend(ident.map(|ident| ident.sym.to_string()));
            }
            ModuleItem::Stmt(Stmt::Decl(decl)) => decl_bindings(decl, &mut names),
            _ => {}
        }
    }

    names.into_iter().collect()
}

fn decl_bindings(decl: &Decl, names: &mut Vec<String>) {
    match decl {
        Decl::Class(class) => names.push(class.ident.sym.to_string()),
        Decl::Fn(function) => names.push(function.ident.sym.to_string()),
        Decl::Var(var) => {
            for declarator in &var.decls {
                pat_bindings(&declarator.name, names);
            }
        }
        Decl::Using(using) => {
            for declarator in &using.decls {
                pat_bindings(&declarator.name, names);
            }
        }
        _ => {}
    }
}

/// `import * as ns` cannot be combined with named specifiers.
fn accepts_named(decl: &ImportDecl, source: &str) -> bool {
    !decl.type_only
        && str_value(&decl.src) == source
        && !decl
            .specifiers
            .iter()
            .any(|specifier| matches!(specifier, ImportSpecifier::Namespace(_)))
}
