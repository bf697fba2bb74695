/// Separator between crop and disease in a raw class label,
/// e.g. `Tomato___Early_blight`.
pub const LABEL_SEPARATOR: &str = "___";

/// Crop shown when the raw label carries no crop part.
pub const UNKNOWN_CROP: &str = "Unknown";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    pub crop: String,
    pub disease: String,
}

/// Split a raw class label into display names.
///
/// Splits at the first `___` only; a single underscore never splits.
/// Remaining underscores on either side become spaces.
pub fn parse_label(raw: &str) -> Labels {
    match raw.split_once(LABEL_SEPARATOR) {
        Some((crop, disease)) => Labels {
            crop: spaced(crop),
            disease: spaced(disease),
        },
        None => Labels {
            crop: UNKNOWN_CROP.to_string(),
            disease: spaced(raw),
        },
    }
}

fn spaced(part: &str) -> String {
    part.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_crop_and_disease() {
        let labels = parse_label("Tomato___Early_blight");
        assert_eq!(labels.crop, "Tomato");
        assert_eq!(labels.disease, "Early blight");
    }

    #[test]
    fn multi_word_crop() {
        let labels = parse_label("Pepper,_bell___Bacterial_spot");
        assert_eq!(labels.crop, "Pepper, bell");
        assert_eq!(labels.disease, "Bacterial spot");
    }

    #[test]
    fn no_separator_means_unknown_crop() {
        let labels = parse_label("healthy");
        assert_eq!(labels.crop, UNKNOWN_CROP);
        assert_eq!(labels.disease, "healthy");
    }

    #[test]
    fn single_underscore_does_not_split() {
        let labels = parse_label("Late_blight");
        assert_eq!(labels.crop, UNKNOWN_CROP);
        assert_eq!(labels.disease, "Late blight");
    }

    #[test]
    fn splits_at_first_separator_only() {
        let labels = parse_label("Corn___Leaf___spot");
        assert_eq!(labels.crop, "Corn");
        // later separators are kept, as spaces
        assert_eq!(labels.disease, "Leaf   spot");
    }

    proptest! {
        #[test]
        fn separator_once_splits_both_sides(
            crop in "[A-Za-z]{1,6}(_[A-Za-z]{1,6}){0,2}",
            disease in "[A-Za-z]{1,6}(_[A-Za-z]{1,6}){0,2}"
        ) {
            let labels = parse_label(&format!("{crop}___{disease}"));
            prop_assert_eq!(labels.crop, crop.replace('_', " "));
            prop_assert_eq!(labels.disease, disease.replace('_', " "));
        }

        #[test]
        fn spaced_input_is_left_alone(input in "[A-Za-z ,()]{0,24}") {
            let labels = parse_label(&input);
            prop_assert_eq!(labels.crop, UNKNOWN_CROP);
            prop_assert_eq!(labels.disease, input);
        }

        #[test]
        fn without_separator_crop_is_unknown(
            input in "[A-Za-z]{1,6}(_[A-Za-z]{1,6}){0,3}"
        ) {
            let labels = parse_label(&input);
            prop_assert_eq!(labels.crop, UNKNOWN_CROP);
            prop_assert_eq!(labels.disease, input.replace('_', " "));
        }
    }
}
