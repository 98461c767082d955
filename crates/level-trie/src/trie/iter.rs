use super::nodes::TrieNode;

/// Iterator over `(key, value)` pairs in lexicographic character order.
#[derive(Debug)]
pub struct Iter<'a, V> {
    stack: Vec<(String, &'a TrieNode<V>)>,
}

impl<'a, V> Iter<'a, V> {
    pub(super) fn new(root: &'a TrieNode<V>) -> Self {
        Self {
            stack: vec![(String::new(), root)],
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, node)) = self.stack.pop() {
            // Pushed in reverse so the smallest character is popped first.
            for (ch, child) in node.children.iter().rev() {
                let mut child_key = key.clone();
                child_key.push(*ch);
                self.stack.push((child_key, child));
            }
            if let Some(value) = node.value() {
                return Some((key, value));
            }
        }
        None
    }
}
