//! Class-score decoding: argmax selection and label resolution.

use morpho_core::Prediction;

use crate::species::SpeciesTable;

/// Index of the maximum score, ties broken by lowest index.
///
/// Only a strictly greater score displaces the running best, so the first
/// maximum wins. NaN scores never win. Returns `None` when no comparable
/// score exists.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if score <= b => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}

/// Decode a raw score vector into a labelled prediction.
///
/// The argmax index is resolved against `table`, falling back to the
/// unknown sentinel when the index has no entry. `None` only when the
/// score vector has no comparable values.
pub fn decode_prediction(scores: &[f32], table: &SpeciesTable) -> Option<Prediction> {
    let class_index = argmax(scores)?;
    Some(Prediction {
        class_index,
        label: table.label(class_index).to_string(),
        confidence: scores[class_index],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::UNKNOWN_LABEL;

    fn scores_with_max(len: usize, index: usize) -> Vec<f32> {
        let mut s = vec![0.01; len];
        s[index] = 0.9;
        s
    }

    #[test]
    fn argmax_picks_maximum() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
    }

    #[test]
    fn argmax_tie_breaks_to_lowest_index() {
        assert_eq!(argmax(&[0.3, 0.7, 0.7, 0.1]), Some(1));
    }

    #[test]
    fn argmax_empty_is_none() {
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn argmax_skips_nan() {
        assert_eq!(argmax(&[f32::NAN, 0.2, 0.5]), Some(2));
        assert_eq!(argmax(&[f32::NAN, f32::NAN]), None);
    }

    #[test]
    fn class_44_decodes_to_monarch() {
        let p = decode_prediction(&scores_with_max(75, 44), &SpeciesTable::builtin()).unwrap();
        assert_eq!(p.class_index, 44);
        assert_eq!(p.label, "MONARCH");
        assert!((p.confidence - 0.9).abs() < 1e-6);
    }

    #[test]
    fn out_of_table_index_decodes_to_unknown() {
        // A model emitting more classes than the table has names for.
        let p = decode_prediction(&scores_with_max(80, 75), &SpeciesTable::builtin()).unwrap();
        assert_eq!(p.class_index, 75);
        assert_eq!(p.label, UNKNOWN_LABEL);
    }

    #[test]
    fn empty_scores_decode_to_none() {
        assert!(decode_prediction(&[], &SpeciesTable::builtin()).is_none());
    }
}
