//! Placeholder text in the classic "Lorem ipsum" style.

const PASSAGE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Integer sodales \
laoreet commodo. Phasellus a purus eu risus elementum consequat. Aenean eu elit ut nunc \
convallis laoreet non ut libero. Suspendisse interdum placerat risus vel ornare. Donec \
vehicula, turpis sed consectetur ullamcorper, ante nunc egestas quam, ultricies adipiscing \
velit enim at nunc. Aenean id diam neque. Praesent ut lacus sed justo viverra fermentum et ut \
sem. Fusce convallis gravida lacinia. Integer semper dolor ut elit sagittis lacinia. Praesent \
sodales scelerisque eros at rhoncus. Duis posuere sapien vel ipsum ornare interdum at eu quam. \
Vestibulum vel massa erat. Aenean quis sagittis purus. Phasellus arcu purus, rutrum id \
consectetur non, bibendum at nibh.";

/// First `count` words of the passage, wrapping around when it runs out.
pub fn words(count: usize) -> String {
    PASSAGE
        .split_whitespace()
        .cycle()
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counts() {
        assert_eq!(words(0), "");
        assert_eq!(words(1), "Lorem");
        assert_eq!(words(5), "Lorem ipsum dolor sit amet,");
    }

    #[test]
    fn test_wraps_past_passage_end() {
        let total = PASSAGE.split_whitespace().count();
        let text = words(total + 2);
        assert_eq!(text.split(' ').count(), total + 2);
        assert!(text.ends_with("nibh. Lorem ipsum"));
    }
}
