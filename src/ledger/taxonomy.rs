//! Fixed category taxonomy used to validate and group ledger records.

use std::fmt;

/// One node of the category tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryNode {
    Leaf {
        name: String,
    },
    Group {
        name: String,
        children: Vec<CategoryNode>,
    },
}

impl CategoryNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        CategoryNode::Leaf { name: name.into() }
    }

    pub fn group(name: impl Into<String>, children: impl IntoIterator<Item = CategoryNode>) -> Self {
        CategoryNode::Group {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CategoryNode::Leaf { name } | CategoryNode::Group { name, .. } => name,
        }
    }

    pub fn children(&self) -> &[CategoryNode] {
        match self {
            CategoryNode::Leaf { .. } => &[],
            CategoryNode::Group { children, .. } => children,
        }
    }

    /// First node named `name` in pre-order, starting with `self`.
    fn find(&self, name: &str) -> Option<&CategoryNode> {
        if self.name() == name {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(name))
    }

    fn collect_names(&self, out: &mut Vec<String>) {
        out.push(self.name().to_string());
        for child in self.children() {
            child.collect_names(out);
        }
    }
}

/// Immutable category hierarchy, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    roots: Vec<CategoryNode>,
}

impl Taxonomy {
    pub fn new(roots: Vec<CategoryNode>) -> Self {
        Self { roots }
    }

    /// The built-in expense/income tree.
    pub fn reference() -> Self {
        use CategoryNode as N;
        Self::new(vec![
            N::group(
                "expense",
                [
                    N::group("food", [N::leaf("meal"), N::leaf("snack"), N::leaf("drink")]),
                    N::group("transportation", [N::leaf("bus"), N::leaf("railway")]),
                ],
            ),
            N::group("income", [N::leaf("salary"), N::leaf("bonus")]),
        ])
    }

    pub fn roots(&self) -> &[CategoryNode] {
        &self.roots
    }

    pub fn lookup(&self, name: &str) -> Option<&CategoryNode> {
        self.roots.iter().find_map(|node| node.find(name))
    }

    pub fn is_valid(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Returns `name` followed by every name nested beneath it, in pre-order.
    /// Empty when `name` is not a category.
    pub fn descendants_of(&self, name: &str) -> Vec<String> {
        let mut names = Vec::new();
        if let Some(node) = self.lookup(name) {
            node.collect_names(&mut names);
        }
        names
    }

    /// Depth-first walk used by the category listing.
    pub fn render<'a>(&'a self, indent_unit: &'a str) -> Render<'a> {
        Render {
            stack: self.roots.iter().rev().map(|node| (0, node)).collect(),
            indent_unit,
        }
    }

    /// Every category name in pre-order.
    pub fn names(&self) -> Vec<&str> {
        self.render("").map(|line| line.name).collect()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::reference()
    }
}

/// A single category as emitted by [`Taxonomy::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLine<'a> {
    pub depth: usize,
    pub name: &'a str,
    indent_unit: &'a str,
}

impl fmt::Display for CategoryLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_str(self.indent_unit)?;
        }
        write!(f, "- {}", self.name)
    }
}

pub struct Render<'a> {
    stack: Vec<(usize, &'a CategoryNode)>,
    indent_unit: &'a str,
}

impl<'a> Iterator for Render<'a> {
    type Item = CategoryLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| (depth + 1, child)));
        Some(CategoryLine {
            depth,
            name: node.name(),
            indent_unit: self.indent_unit,
        })
    }
}
