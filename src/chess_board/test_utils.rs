use super::ChessField;

#[cfg(test)]
pub fn assert_moves<I: IntoIterator<Item = ChessField>>(generated: I, mut expected: Vec<&str>) {
    let mut generated_converted: Vec<_> = generated.into_iter().map(|f| f.as_algebraic()).collect();
    generated_converted.sort();
    expected.sort();

    assert_eq!(generated_converted, expected);
}

#[cfg(test)]
pub fn field(square: &str) -> ChessField {
    square.parse().unwrap()
}
