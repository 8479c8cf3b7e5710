use hashbrown::HashMap;

#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    end_of_word: bool,
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: TrieNode::default(),
        }
    }

    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for char in word.chars() {
            node = node.children.entry(char).or_default();
        }
        node.end_of_word = true;
    }

    pub fn search(&self, word: &str) -> bool {
        match self.find_node(word) {
            Some(node) => node.end_of_word,
            None => false,
        }
    }

    pub fn prefix_matches(&self, prefix: &str) -> Vec<String> {
        let mut matches = Vec::new();
        if let Some(node) = self.find_node(prefix) {
            Self::collect_words(node, prefix.to_string(), &mut matches);
        }
        matches
    }

    fn find_node(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for char in path.chars() {
            node = node.children.get(&char)?;
        }
        Some(node)
    }

    fn collect_words(node: &TrieNode, word: String, matches: &mut Vec<String>) {
        for (&char, child) in node.children.iter() {
            let mut next = word.clone();
            next.push(char);
            Self::collect_words(child, next, matches);
        }

        if node.end_of_word {
            matches.push(word);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn test_insert_and_search() {
        let mut trie = Trie::new();
        trie.insert("card");
        trie.insert("car");

        assert!(trie.search("car"));
        assert!(trie.search("card"));
        assert!(!trie.search("ca"));
        assert!(!trie.search("cards"));
        assert!(!trie.search("dog"));
        assert!(!trie.search(""));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("cat");
        trie.insert("cat");

        assert_eq!(vec!["cat"], trie.prefix_matches("c"));
    }

    #[test]
    fn test_empty_word_marks_root() {
        let mut trie = Trie::new();
        assert!(!trie.search(""));
        trie.insert("");
        assert!(trie.search(""));
        assert_eq!(vec![""], trie.prefix_matches(""));
    }

    #[test]
    fn test_prefix_matches() {
        let mut trie = Trie::new();
        for word in ["cat", "car", "card", "dog"] {
            trie.insert(word);
        }

        assert_eq!(vec!["car", "card", "cat"], sorted(trie.prefix_matches("ca")));
        assert_eq!(vec!["car", "card"], sorted(trie.prefix_matches("car")));
        assert_eq!(vec!["card"], trie.prefix_matches("card"));
        assert_eq!(
            vec!["car", "card", "cat", "dog"],
            sorted(trie.prefix_matches(""))
        );
        assert!(trie.prefix_matches("cart").is_empty());
        assert!(trie.prefix_matches("x").is_empty());
    }

    #[test]
    fn test_case_sensitive_and_unicode() {
        let mut trie = Trie::new();
        trie.insert("Über");
        trie.insert("über");

        assert!(trie.search("Über"));
        assert!(!trie.search("uber"));
        assert_eq!(vec!["über"], trie.prefix_matches("ü"));
    }

    #[test]
    fn test_repeated_prefix_matches_are_stable() {
        let mut trie = Trie::new();
        for word in ["alpha", "alps", "altitude", "also"] {
            trie.insert(word);
        }

        let first = sorted(trie.prefix_matches("al"));
        let second = sorted(trie.prefix_matches("al"));
        assert_eq!(first, second);
        assert_eq!(4, first.len());
    }
}
