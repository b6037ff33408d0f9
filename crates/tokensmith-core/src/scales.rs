use crate::catalog::ScaleMap;
use crate::document::DesignNode;
use crate::resolvers::px;

/// Names given to the first three values of a scale
pub const ORDINAL_NAMES: [&str; 3] = ["small", "medium", "large"];

/// Distinct numeric values in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleSet {
    values: Vec<f64>,
}

impl ScaleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value; returns false if it was already present
    pub fn insert(&mut self, value: f64) -> bool {
        let seen = self
            .values
            .iter()
            .any(|v| *v == value || (v.is_nan() && value.is_nan()));
        if !seen {
            self.values.push(value);
        }
        !seen
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<f64> for ScaleSet {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

/// Raw numeric attributes gathered from the whole document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleSets {
    pub radius: ScaleSet,
    pub stroke: ScaleSet,
    /// Every present padding side, all sides pooled together
    pub spacing: ScaleSet,
}

impl ScaleSets {
    /// Walk the tree from `root` in pre-order and collect its scale values
    pub fn collect(root: &DesignNode) -> Self {
        root.descendants()
            .fold(Self::default(), |sets, node| sets.record(node))
    }

    fn record(mut self, node: &DesignNode) -> Self {
        if let Some(radius) = node.corner_radius {
            self.radius.insert(radius);
        }
        if let Some(weight) = node.stroke_weight {
            self.stroke.insert(weight);
        }
        for side in node.paddings() {
            self.spacing.insert(side);
        }
        self
    }
}

/// Bucket name for the value at `index` of the sorted scale
pub fn scale_name(index: usize) -> String {
    match ORDINAL_NAMES.get(index) {
        Some(name) => name.to_string(),
        None => format!("size{}", index + 1),
    }
}

/// Name a scale's values by ascending rank.
///
/// Zero values are dropped. The first three distinct values become
/// small/medium/large and the rest `size4`, `size5`, ...
pub fn name_scale(set: &ScaleSet) -> ScaleMap {
    let mut values: Vec<f64> = set
        .values()
        .iter()
        .copied()
        .filter(|v| *v != 0.0 && !v.is_nan())
        .collect();
    values.sort_by(f64::total_cmp);
    values.dedup();

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| (scale_name(index), px(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scale(values: &[f64]) -> ScaleSet {
        values.iter().copied().collect()
    }

    fn named(pairs: &[(&str, &str)]) -> ScaleMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_duplicates_collapse_and_sort() {
        assert_eq!(
            name_scale(&scale(&[8.0, 4.0, 4.0, 16.0])),
            named(&[("small", "4px"), ("medium", "8px"), ("large", "16px")])
        );
    }

    #[test]
    fn test_values_past_three_get_size_names() {
        let named_scale = name_scale(&scale(&[1.0, 2.0, 3.0, 4.0]));
        assert_eq!(
            named_scale,
            named(&[
                ("small", "1px"),
                ("medium", "2px"),
                ("large", "3px"),
                ("size4", "4px")
            ])
        );
    }

    #[test]
    fn test_zero_is_discarded() {
        let named_scale = name_scale(&scale(&[0.0, 12.0, 0.0, 2.0]));
        assert_eq!(named_scale, named(&[("small", "2px"), ("medium", "12px")]));
        assert!(name_scale(&scale(&[0.0])).is_empty());
    }

    #[test]
    fn test_fractional_values_keep_precision() {
        let named_scale = name_scale(&scale(&[1.5, 0.5]));
        assert_eq!(named_scale, named(&[("small", "0.5px"), ("medium", "1.5px")]));
    }

    #[test]
    fn test_scale_names() {
        assert_eq!(scale_name(0), "small");
        assert_eq!(scale_name(2), "large");
        assert_eq!(scale_name(3), "size4");
        assert_eq!(scale_name(9), "size10");
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut set = ScaleSet::new();
        assert!(set.insert(4.0));
        assert!(!set.insert(4.0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_collect_walks_whole_tree() {
        let tree: DesignNode = serde_json::from_str(
            r#"{"id": "0", "cornerRadius": 4, "children": [
                {"id": "1", "strokeWeight": 1, "paddingLeft": 8, "paddingRight": 8,
                 "children": [{"id": "1.1", "cornerRadius": 12, "paddingTop": 16}]},
                {"id": "2", "cornerRadius": 4, "strokeWeight": 2, "paddingBottom": 24}
            ]}"#,
        )
        .unwrap();

        let sets = ScaleSets::collect(&tree);
        assert_eq!(sets.radius.values(), &[4.0, 12.0]);
        assert_eq!(sets.stroke.values(), &[1.0, 2.0]);
        assert_eq!(sets.spacing.values(), &[8.0, 16.0, 24.0]);
    }

    #[test]
    fn test_absent_padding_sides_are_not_collected() {
        let tree: DesignNode =
            serde_json::from_str(r#"{"id": "0", "paddingTop": 10}"#).unwrap();
        let sets = ScaleSets::collect(&tree);
        assert_eq!(sets.spacing.values(), &[10.0]);
        assert!(sets.radius.is_empty());
        assert!(sets.stroke.is_empty());
    }

    #[test]
    fn test_collect_handles_deeply_nested_tree() {
        const DEPTH: usize = 5_000;

        let mut root = DesignNode::default();
        for depth in (0..DEPTH).rev() {
            root = DesignNode {
                id: depth.to_string(),
                corner_radius: Some((depth % 3 + 1) as f64),
                stroke_weight: (depth == DEPTH - 1).then_some(2.0),
                children: vec![root],
                ..Default::default()
            };
        }

        // A small stack fails fast if the walk ever recurses per level
        let sets = std::thread::scope(|s| {
            std::thread::Builder::new()
                .stack_size(128 * 1024)
                .spawn_scoped(s, || ScaleSets::collect(&root))
                .unwrap()
                .join()
                .unwrap()
        });
        assert_eq!(sets.radius.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(sets.stroke.values(), &[2.0]);

        // Tear the chain down iteratively
        let mut pending = std::mem::take(&mut root.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
