//! Tests for puzzle text parsing

#[cfg(test)]
mod tests {
    use tilestitch::io::error::FormatError;
    use tilestitch::io::parser::parse_tile_set;

    const SAMPLE: &str = include_str!("../../data/sample_tiles.txt");

    #[test]
    fn test_parse_sample() {
        let set = parse_tile_set(SAMPLE).unwrap();

        assert_eq!(set.len(), 9);
        assert_eq!(set.tile_size, 10);
        let ids: Vec<u64> = set.tiles.iter().map(|tile| tile.id).collect();
        assert_eq!(
            ids,
            [2311, 1951, 1171, 1427, 1489, 2473, 2971, 2729, 3079]
        );
    }

    #[test]
    fn test_blank_line_runs_between_blocks() {
        let set = parse_tile_set("\n\nTile 1:\n###\n#.#\n###\n\n\n\nTile 2:\n...\n.#.\n...\n\n").unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_tile_set(""), Err(FormatError::EmptyInput));
        assert_eq!(parse_tile_set("\n\n  \n\n"), Err(FormatError::EmptyInput));
    }

    #[test]
    fn test_missing_header() {
        let result = parse_tile_set("###\n#.#\n###");
        assert_eq!(result, Err(FormatError::MissingHeader { block: 0 }));
    }

    #[test]
    fn test_header_without_colon() {
        let result = parse_tile_set("Tile 17\n###\n#.#\n###");
        assert_eq!(result, Err(FormatError::MissingHeader { block: 0 }));
    }

    #[test]
    fn test_non_numeric_identifier() {
        let result = parse_tile_set("Tile seven:\n###\n#.#\n###");
        assert_eq!(
            result,
            Err(FormatError::InvalidIdentifier {
                block: 0,
                token: "seven".to_string(),
            })
        );
    }

    #[test]
    fn test_zero_identifier_is_rejected() {
        let result = parse_tile_set("Tile 0:\n###\n#.#\n###");
        assert!(matches!(
            result,
            Err(FormatError::InvalidIdentifier { block: 0, .. })
        ));
    }

    #[test]
    fn test_ragged_row() {
        let result = parse_tile_set("Tile 7:\n###\n#.#\n##");
        assert_eq!(
            result,
            Err(FormatError::RowLength {
                tile: 7,
                row: 2,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_unknown_pixel_character() {
        let result = parse_tile_set("Tile 7:\n###\n#x#\n###");
        assert_eq!(
            result,
            Err(FormatError::UnknownPixel {
                tile: 7,
                row: 1,
                column: 1,
                character: 'x',
            })
        );
    }

    #[test]
    fn test_undersized_tile() {
        let result = parse_tile_set("Tile 7:\n##\n##");
        assert_eq!(result, Err(FormatError::TileTooSmall { tile: 7, size: 2 }));
    }

    #[test]
    fn test_mismatched_tile_sizes() {
        let result = parse_tile_set("Tile 1:\n###\n#.#\n###\n\nTile 2:\n####\n#..#\n#..#\n####");
        assert_eq!(
            result,
            Err(FormatError::TileSizeMismatch {
                tile: 2,
                expected: 3,
                found: 4,
            })
        );
    }

    #[test]
    fn test_second_error_reports_block_position() {
        let result = parse_tile_set("Tile 1:\n###\n#.#\n###\n\nnot a header\n#.#\n###");
        assert_eq!(result, Err(FormatError::MissingHeader { block: 1 }));
    }
}
