//! Published readability formulas
//!
//! Each function reads only the counts it needs. Every division is guarded:
//! a zero denominator makes the affected metric 0.

use super::statistics::TextStatistics;

#[inline]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[inline]
fn has_text(stats: &TextStatistics) -> bool {
    stats.words > 0 && stats.sentences > 0
}

/// Average sentence length
pub fn words_per_sentence(stats: &TextStatistics) -> f64 {
    ratio(stats.words, stats.sentences)
}

/// Average syllables per word
pub fn syllables_per_word(stats: &TextStatistics) -> f64 {
    ratio(stats.syllables, stats.words)
}

/// Flesch-Kincaid grade level
pub fn flesch_kincaid_grade(stats: &TextStatistics) -> f64 {
    if !has_text(stats) {
        return 0.0;
    }
    0.39 * words_per_sentence(stats) + 11.8 * syllables_per_word(stats) - 15.59
}

/// Flesch reading ease (higher is easier)
pub fn flesch_reading_ease(stats: &TextStatistics) -> f64 {
    if !has_text(stats) {
        return 0.0;
    }
    206.835 - 1.015 * words_per_sentence(stats) - 84.6 * syllables_per_word(stats)
}

/// SMOG grade; only defined from three sentences on
pub fn smog(stats: &TextStatistics) -> f64 {
    if stats.sentences < 3 {
        return 0.0;
    }
    1.0430 * (stats.polysyllables as f64 * 30.0 / stats.sentences as f64).sqrt() + 3.1291
}

/// Coleman-Liau index
pub fn coleman_liau(stats: &TextStatistics) -> f64 {
    if stats.words == 0 {
        return 0.0;
    }
    let letters_per_100 = ratio(stats.letters, stats.words) * 100.0;
    let sentences_per_100 = ratio(stats.sentences, stats.words) * 100.0;
    0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8
}

/// Automated readability index
pub fn automated_readability_index(stats: &TextStatistics) -> f64 {
    if !has_text(stats) {
        return 0.0;
    }
    4.71 * ratio(stats.characters, stats.words) + 0.5 * words_per_sentence(stats) - 21.43
}

/// New Dale-Chall score
pub fn dale_chall(stats: &TextStatistics) -> f64 {
    if stats.words == 0 {
        return 0.0;
    }
    let difficult_percent = ratio(stats.difficult_words, stats.words) * 100.0;
    let raw = 0.1579 * difficult_percent + 0.0496 * words_per_sentence(stats);
    if difficult_percent > 5.0 {
        raw + 3.6365
    } else {
        raw
    }
}

/// Gunning fog index
pub fn gunning_fog(stats: &TextStatistics) -> f64 {
    if stats.words == 0 {
        return 0.0;
    }
    0.4 * (words_per_sentence(stats) + 100.0 * ratio(stats.complex_words, stats.words))
}

/// Linsear Write
///
/// Easy words score 1, polysyllables 3. The per-100-word sample of the
/// original method cancels out of the ratio, so the whole text is used.
pub fn linsear_write(stats: &TextStatistics) -> f64 {
    if !has_text(stats) {
        return 0.0;
    }
    let points = stats.easy_words() + 3 * stats.polysyllables;
    let provisional = ratio(points, stats.sentences);
    if provisional > 20.0 {
        provisional / 2.0
    } else {
        (provisional - 2.0) / 2.0
    }
}

/// Läsbarhetsindex
pub fn lix(stats: &TextStatistics) -> f64 {
    if stats.words == 0 {
        return 0.0;
    }
    words_per_sentence(stats) + 100.0 * ratio(stats.long_words, stats.words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    fn sample() -> TextStatistics {
        TextStatistics {
            sentences: 5,
            words: 100,
            syllables: 150,
            characters: 450,
            letters: 440,
            polysyllables: 10,
            long_words: 20,
            complex_words: 8,
            difficult_words: 12,
        }
    }

    #[test]
    fn test_ratios() {
        approx(words_per_sentence(&sample()), 20.0);
        approx(syllables_per_word(&sample()), 1.5);
    }

    #[test]
    fn test_flesch_kincaid_grade() {
        // 0.39 * 20 + 11.8 * 1.5 - 15.59
        approx(flesch_kincaid_grade(&sample()), 9.91);
    }

    #[test]
    fn test_flesch_reading_ease() {
        approx(flesch_reading_ease(&sample()), 59.635);
    }

    #[test]
    fn test_smog() {
        approx(smog(&sample()), 1.0430 * 60f64.sqrt() + 3.1291);
        let short = TextStatistics {
            sentences: 2,
            ..sample()
        };
        approx(smog(&short), 0.0);
    }

    #[test]
    fn test_coleman_liau() {
        approx(coleman_liau(&sample()), 8.592);
    }

    #[test]
    fn test_automated_readability_index() {
        approx(automated_readability_index(&sample()), 9.765);
    }

    #[test]
    fn test_dale_chall_adjustment() {
        approx(dale_chall(&sample()), 0.1579 * 12.0 + 0.0496 * 20.0 + 3.6365);

        let familiar = TextStatistics {
            difficult_words: 5,
            ..sample()
        };
        // exactly 5% gets no adjustment
        approx(dale_chall(&familiar), 0.1579 * 5.0 + 0.0496 * 20.0);
    }

    #[test]
    fn test_gunning_fog() {
        approx(gunning_fog(&sample()), 11.2);
    }

    #[test]
    fn test_linsear_write_branches() {
        // (90 + 3 * 10) / 5 = 24 > 20
        approx(linsear_write(&sample()), 12.0);

        let many_sentences = TextStatistics {
            sentences: 10,
            ..sample()
        };
        // 120 / 10 = 12 <= 20
        approx(linsear_write(&many_sentences), 5.0);
    }

    #[test]
    fn test_lix() {
        approx(lix(&sample()), 40.0);
    }

    #[test]
    fn test_zero_denominators() {
        let empty = TextStatistics::default();
        for value in [
            words_per_sentence(&empty),
            syllables_per_word(&empty),
            flesch_kincaid_grade(&empty),
            flesch_reading_ease(&empty),
            smog(&empty),
            coleman_liau(&empty),
            automated_readability_index(&empty),
            dale_chall(&empty),
            gunning_fog(&empty),
            linsear_write(&empty),
            lix(&empty),
        ] {
            assert_eq!(value, 0.0);
        }

        let no_sentences = TextStatistics {
            sentences: 0,
            ..sample()
        };
        assert_eq!(flesch_kincaid_grade(&no_sentences), 0.0);
        assert_eq!(words_per_sentence(&no_sentences), 0.0);
    }
}
