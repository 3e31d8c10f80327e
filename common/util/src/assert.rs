/// Assert that each of the expected fragments appears in `content`, in the given order.
///
/// e.g. `assert_contains_inorder!(trace_content, ["Parsed resistance", "Encoded bands"]);`
#[macro_export]
macro_rules! assert_contains_inorder {
    ($content:expr, $expected:expr) => {
        $crate::assert::assert_contains_inorder(&$content, &$expected)
    };
}

pub fn assert_contains_inorder(content: &str, expected: &[&str]) {
    let mut remaining = content;

    for fragment in expected {
        match remaining.find(fragment) {
            Some(index) => remaining = &remaining[index + fragment.len()..],
            None => panic!(
                "fragment not found, or out of order. fragment: '{}', content: '{}'",
                fragment, content
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[])]
    #[case(&["alpha"])]
    #[case(&["alpha", "gamma"])]
    #[case(&["alpha", "beta", "gamma"])]
    fn in_order(#[case] expected: &[&str]) {
        assert_contains_inorder("alpha beta gamma", expected);
    }

    #[rstest]
    #[case(&["gamma", "alpha"])]
    #[case(&["delta"])]
    #[case(&["alpha", "alpha"])]
    #[should_panic]
    fn not_in_order(#[case] expected: &[&str]) {
        assert_contains_inorder("alpha beta gamma", expected);
    }

    #[test]
    fn macro_accepts_strings() {
        let content = "first\nsecond\n".to_string();
        assert_contains_inorder!(content, ["first", "second"]);
    }
}
