/// One annotated field, ready for a save/restore emitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanField<C> {
    pub name: String,
    /// Bundle accessor suffix (`putInt`/`getInt` → `Int`); `None` when the
    /// type has no accessor, which has already been reported
    pub method_suffix: Option<&'static str>,
    /// `(declared type)` when the getter returns a supertype, otherwise empty
    pub cast_expr: String,
    pub enclosing: C,
}

impl<C> PlanField<C> {
    pub fn requires_cast(&self) -> bool {
        !self.cast_expr.is_empty()
    }
}

/// Helper-level facts about a class declaring annotated fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosingClassPlan<C> {
    pub package: String,
    /// Nested name with `$` separators, `Outer$Inner`
    pub sanitized_name: String,
    /// Nested name as declared, `Outer.Inner`
    pub original_nested_name: String,
    /// Sanitized fully-qualified name of the nearest annotated ancestor
    pub parent_fqcn: Option<String>,
    pub class_ref: C,
}

impl<C> EnclosingClassPlan<C> {
    pub fn fqcn(&self) -> String {
        qualify(&self.package, &self.sanitized_name)
    }
}

pub(crate) fn sanitize(nested_name: &str) -> String {
    nested_name.replace('.', "$")
}

pub(crate) fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassGroup<C> {
    pub plan: EnclosingClassPlan<C>,
    pub fields: Vec<PlanField<C>>,
}

/// Enclosing class plans with their fields, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPlanMap<C> {
    groups: Vec<ClassGroup<C>>,
}

impl<C> Default for ClassPlanMap<C> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<C> ClassPlanMap<C> {
    pub(crate) fn push_group(&mut self, plan: EnclosingClassPlan<C>) -> usize {
        self.groups.push(ClassGroup { plan, fields: Vec::new() });
        self.groups.len() - 1
    }

    pub(crate) fn push_field(&mut self, group: usize, field: PlanField<C>) {
        self.groups[group].fields.push(field);
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of fields across all classes
    pub fn field_count(&self) -> usize {
        self.groups.iter().map(|g| g.fields.len()).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassGroup<C>> {
        self.groups.iter()
    }

    /// Group whose plan has the given sanitized fully-qualified name
    pub fn get(&self, fqcn: &str) -> Option<&ClassGroup<C>> {
        self.groups.iter().find(|g| g.plan.fqcn() == fqcn)
    }

    pub fn plans(&self) -> impl Iterator<Item = &EnclosingClassPlan<C>> {
        self.groups.iter().map(|g| &g.plan)
    }
}

impl<C> IntoIterator for ClassPlanMap<C> {
    type Item = ClassGroup<C>;
    type IntoIter = std::vec::IntoIter<ClassGroup<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, C> IntoIterator for &'a ClassPlanMap<C> {
    type Item = &'a ClassGroup<C>;
    type IntoIter = std::slice::Iter<'a, ClassGroup<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
