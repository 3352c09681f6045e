use crate::core::{Board, Slot, PITS_PER_SIDE, SLOT_COUNT};

/// 文字列から盤面を初期化する
///
/// Layout is two rows separated by `/`, each listing a side's six pits in
/// canonical order followed by its store:
///
/// ```text
/// "4 4 4 4 4 4 0 / 4 4 4 4 4 4 0"
///  A B C D E F SA   G H I J K L SB
/// ```
pub fn setup_from_str(layout: &str) -> anyhow::Result<Board> {
    let rows: Vec<&str> = layout.split('/').collect();
    if rows.len() != 2 {
        anyhow::bail!("expected two rows separated by '/', got {}", rows.len());
    }

    let mut counts = [0u32; SLOT_COUNT];
    for (row_index, row) in rows.iter().enumerate() {
        let values = row
            .split_whitespace()
            .map(|s| s.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()?;
        if values.len() != PITS_PER_SIDE + 1 {
            anyhow::bail!(
                "row {} has {} entries, expected {}",
                row_index + 1,
                values.len(),
                PITS_PER_SIDE + 1
            );
        }
        let offset = row_index * (PITS_PER_SIDE + 1);
        counts[offset..offset + PITS_PER_SIDE + 1].copy_from_slice(&values);
    }

    Ok(Board::from_counts(counts))
}

/// Inverse of [`setup_from_str`].
pub fn layout_string(board: &Board) -> String {
    let row = |slots: &[Slot]| {
        slots
            .iter()
            .map(|&slot| board.seeds(slot).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    format!(
        "{} / {}",
        row(&Slot::ALL[..=Slot::StoreA.index()]),
        row(&Slot::ALL[Slot::G.index()..])
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;

    #[test]
    fn test_parse_standard_layout() {
        let board = setup_from_str("4 4 4 4 4 4 0 / 4 4 4 4 4 4 0").unwrap();
        assert_eq!(board, Board::standard(4));
    }

    #[test]
    fn test_parse_custom_layout() {
        let board = setup_from_str("0 0 0 0 0 1 10 / 3 2 0 0 0 0 8").unwrap();
        assert_eq!(board.seeds(Slot::F), 1);
        assert_eq!(board.store(Side::A), 10);
        assert_eq!(board.seeds(Slot::G), 3);
        assert_eq!(board.store(Side::B), 8);
        assert_eq!(layout_string(&board), "0 0 0 0 0 1 10 / 3 2 0 0 0 0 8");
    }

    #[test]
    fn test_rejects_malformed_layouts() {
        assert!(setup_from_str("4 4 4 4 4 4 0").is_err());
        assert!(setup_from_str("4 4 4 4 4 0 / 4 4 4 4 4 4 0").is_err());
        assert!(setup_from_str("4 4 x 4 4 4 0 / 4 4 4 4 4 4 0").is_err());
    }
}
