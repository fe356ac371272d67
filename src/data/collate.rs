// ============================================================
// Collate — Samples to Padded Batches
// ============================================================
// The loader hands collate a group of samples (usually
// batch_size * group_size of them). Collate:
//
//   1. optionally orders the group by text length, longest first
//   2. cuts that order into chunks of batch_size
//   3. keeps or drops the short tail chunk
//   4. pads every chunk on its own (reprocess)
//
// Sorting happens over the whole group BEFORE chunking, so each
// chunk holds utterances of similar length and wastes little
// padding. Padding widths are per chunk, so two batches from the
// same group may have different shapes.

use std::cmp::Reverse;

use ndarray::Array1;

use crate::data::padding::{pad_1d, pad_2d};
use crate::data::speaker::stack_speakers;
use crate::domain::{Batch, Sample, TextBatch, TextSample};
use crate::error::{DatasetError, Result};

// ─── CollateOptions ──────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollateOptions {
    batch_size: usize,
    sort:       bool,
    drop_last:  bool,
}

impl CollateOptions {
    pub fn new(batch_size: usize, sort: bool, drop_last: bool) -> Result<Self> {
        if batch_size == 0 {
            return Err(DatasetError::InvalidConfig("batch_size must be at least 1".into()));
        }
        Ok(Self { batch_size, sort, drop_last })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn sort(&self) -> bool {
        self.sort
    }

    pub fn drop_last(&self) -> bool {
        self.drop_last
    }
}

// ─── Index bookkeeping ───────────────────────────────────────────────────────
/// Indices 0..n, stably ordered by descending length when `sort`.
pub fn length_order(lengths: &[usize], sort: bool) -> Vec<usize> {
    let mut order: Vec<usize> = (0..lengths.len()).collect();
    if sort {
        order.sort_by_key(|&i| Reverse(lengths[i]));
    }
    order
}

/// Cut `order` into chunks of `batch_size`. The remainder becomes one
/// extra chunk unless `drop_last`; an empty remainder adds nothing.
pub fn partition(order: &[usize], options: CollateOptions) -> Vec<Vec<usize>> {
    let batch_size = options.batch_size;
    let full = order.len() - order.len() % batch_size;
    let (head, tail) = order.split_at(full);

    let mut groups: Vec<Vec<usize>> = head.chunks(batch_size).map(<[usize]>::to_vec).collect();
    if !options.drop_last && !tail.is_empty() {
        groups.push(tail.to_vec());
    }
    groups
}

// ─── Training batches ────────────────────────────────────────────────────────
/// Pad the samples at `idxs` into one batch.
pub fn reprocess(data: &[Sample], idxs: &[usize]) -> Result<Batch> {
    let picked: Vec<&Sample> = idxs
        .iter()
        .map(|&index| {
            data.get(index)
                .ok_or(DatasetError::IndexOutOfRange { index, len: data.len() })
        })
        .collect::<Result<_>>()?;

    let ids      = picked.iter().map(|s| s.id.clone()).collect();
    let speakers = stack_speakers(picked.iter().map(|s| &s.speaker))?;

    let text_lens: Array1<usize> = picked.iter().map(|s| s.text_len()).collect();
    let mel_lens:  Array1<usize> = picked.iter().map(|s| s.mel_len()).collect();

    let texts     = pad_1d(&picked.iter().map(|s| s.text.view()).collect::<Vec<_>>());
    let pitches   = pad_1d(&picked.iter().map(|s| s.pitch.view()).collect::<Vec<_>>());
    let energies  = pad_1d(&picked.iter().map(|s| s.energy.view()).collect::<Vec<_>>());
    let durations = pad_1d(&picked.iter().map(|s| s.duration.view()).collect::<Vec<_>>());
    let mels      = pad_2d(&picked.iter().map(|s| s.mel.view()).collect::<Vec<_>>())?;
    let avg_mel_phs =
        pad_2d(&picked.iter().map(|s| s.avg_mel_ph.view()).collect::<Vec<_>>())?;

    Ok(Batch {
        ids,
        speakers,
        texts,
        max_text_len: text_lens.iter().copied().max().unwrap_or(0),
        text_lens,
        mels,
        max_mel_len: mel_lens.iter().copied().max().unwrap_or(0),
        mel_lens,
        pitches,
        energies,
        durations,
        avg_mel_phs,
    })
}

/// Split a loaded group into independently padded batches.
pub fn collate(data: &[Sample], options: CollateOptions) -> Result<Vec<Batch>> {
    let lengths: Vec<usize> = data.iter().map(Sample::text_len).collect();
    let order = length_order(&lengths, options.sort);
    let groups = partition(&order, options);

    tracing::debug!(
        "Collating {} samples into {} batches (batch_size={}, sort={}, drop_last={})",
        data.len(),
        groups.len(),
        options.batch_size,
        options.sort,
        options.drop_last
    );

    groups.iter().map(|idxs| reprocess(data, idxs)).collect()
}

// ─── Synthesis batches ───────────────────────────────────────────────────────
/// Pad a whole set of text samples as a single batch.
pub fn collate_text(items: &[TextSample]) -> Result<TextBatch> {
    let ids       = items.iter().map(|s| s.id.clone()).collect();
    let speakers  = stack_speakers(items.iter().map(|s| &s.speaker))?;
    let text_lens: Array1<usize> = items.iter().map(|s| s.text.len()).collect();
    let texts     = pad_1d(&items.iter().map(|s| s.text.view()).collect::<Vec<_>>());

    Ok(TextBatch {
        ids,
        speakers,
        texts,
        max_text_len: text_lens.iter().copied().max().unwrap_or(0),
        text_lens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Speaker, SpeakerBatch};
    use ndarray::{array, s, Array2};

    const MEL_CHANNELS: usize = 4;

    fn sample(id: &str, text_len: usize, mel_len: usize) -> Sample {
        Sample {
            id:         id.to_string(),
            speaker:    Speaker::Id(0),
            text:       Array1::from_elem(text_len, 7),
            mel:        Array2::ones((mel_len, MEL_CHANNELS)),
            pitch:      Array1::ones(text_len),
            energy:     Array1::ones(text_len),
            duration:   Array1::from_elem(text_len, 2),
            avg_mel_ph: Array2::ones((text_len, MEL_CHANNELS)),
        }
    }

    fn options(batch_size: usize, drop_last: bool) -> CollateOptions {
        CollateOptions::new(batch_size, false, drop_last).unwrap()
    }

    fn sizes(groups: &[Vec<usize>]) -> Vec<usize> {
        groups.iter().map(Vec::len).collect()
    }

    #[test]
    fn partition_keeps_tail_unless_dropped() {
        let order: Vec<usize> = (0..10).collect();
        assert_eq!(sizes(&partition(&order, options(4, false))), vec![4, 4, 2]);
        assert_eq!(sizes(&partition(&order, options(4, true))), vec![4, 4]);
        assert_eq!(partition(&order, options(4, false))[2], vec![8, 9]);
    }

    #[test]
    fn empty_tail_adds_no_batch() {
        let order: Vec<usize> = (0..8).collect();
        assert_eq!(sizes(&partition(&order, options(4, false))), vec![4, 4]);
        assert_eq!(sizes(&partition(&order, options(4, true))), vec![4, 4]);
        assert!(partition(&[], options(4, false)).is_empty());
    }

    #[test]
    fn sort_is_global_and_stable() {
        let lengths = [3, 9, 1, 9, 5, 2];
        assert_eq!(length_order(&lengths, false), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(length_order(&lengths, true), vec![1, 3, 4, 0, 5, 2]);

        let groups = partition(&length_order(&lengths, true), options(4, false));
        let flat: Vec<usize> = groups.concat().iter().map(|&i| lengths[i]).collect();
        assert!(flat.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn zero_batch_size_never_reaches_partition() {
        assert!(matches!(
            CollateOptions::new(0, false, false),
            Err(DatasetError::InvalidConfig(_))
        ));
        assert_eq!(sizes(&partition(&[0, 1, 2], options(1, false))), vec![1, 1, 1]);
    }

    #[test]
    fn reprocess_pads_each_field() {
        let data = vec![sample("a", 3, 5), sample("b", 2, 8)];
        let batch = reprocess(&data, &[0, 1]).unwrap();

        assert_eq!(batch.ids, vec!["a", "b"]);
        assert_eq!(batch.speakers, SpeakerBatch::Ids(array![0, 0]));
        assert_eq!(batch.text_lens, array![3, 2]);
        assert_eq!(batch.max_text_len, 3);
        assert_eq!(batch.mel_lens, array![5, 8]);
        assert_eq!(batch.max_mel_len, 8);

        assert_eq!(batch.texts, array![[7, 7, 7], [7, 7, 0]]);
        assert_eq!(batch.mels.dim(), (2, 8, MEL_CHANNELS));
        assert_eq!(batch.pitches.dim(), (2, 3));
        assert_eq!(batch.energies.dim(), (2, 3));
        assert_eq!(batch.durations, array![[2, 2, 2], [2, 2, 0]]);
        assert_eq!(batch.avg_mel_phs.dim(), (2, 3, MEL_CHANNELS));

        // Frames past each mel length are zero
        assert_eq!(batch.mels.slice(s![0, 5.., ..]).sum(), 0.0);
        assert_eq!(batch.mels.slice(s![0, ..5, ..]).sum(), (5 * MEL_CHANNELS) as f32);
    }

    #[test]
    fn reprocess_rejects_bad_index() {
        let data = vec![sample("a", 1, 1)];
        assert!(matches!(
            reprocess(&data, &[0, 3]),
            Err(DatasetError::IndexOutOfRange { index: 3, len: 1 })
        ));
    }

    #[test]
    fn collate_pads_per_batch() {
        let data: Vec<Sample> = [4, 10, 2, 9, 3]
            .iter()
            .enumerate()
            .map(|(i, &n)| sample(&format!("u{i}"), n, n * 2))
            .collect();

        let options = CollateOptions::new(2, true, false).unwrap();
        let batches = collate(&data, options).unwrap();

        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].ids, vec!["u1", "u3"]);
        assert_eq!(batches[0].max_text_len, 10);
        assert_eq!(batches[1].ids, vec!["u0", "u4"]);
        assert_eq!(batches[1].texts.ncols(), 4);
        assert_eq!(batches[2].ids, vec!["u2"]);
        assert_eq!(batches[2].texts.dim(), (1, 2));

        let dropped = collate(&data, CollateOptions::new(2, true, true).unwrap()).unwrap();
        assert_eq!(dropped.len(), 2);
    }

    #[test]
    fn collate_without_sort_keeps_file_order() {
        let data: Vec<Sample> = (0..10).map(|i| sample(&format!("u{i}"), i + 1, 3)).collect();
        let batches = collate(&data, CollateOptions::new(4, false, false).unwrap()).unwrap();

        let lens: Vec<usize> = batches.iter().map(Batch::len).collect();
        assert_eq!(lens, vec![4, 4, 2]);
        assert_eq!(batches[2].ids, vec!["u8", "u9"]);
    }

    #[test]
    fn text_collate_pads_only_text() {
        let items = vec![
            TextSample { id: "x".into(), speaker: Speaker::Id(2), text: array![1, 2, 3] },
            TextSample { id: "y".into(), speaker: Speaker::Id(5), text: array![4] },
        ];
        let batch = collate_text(&items).unwrap();

        assert_eq!(batch.ids, vec!["x", "y"]);
        assert_eq!(batch.speakers, SpeakerBatch::Ids(array![2, 5]));
        assert_eq!(batch.texts, array![[1, 2, 3], [4, 0, 0]]);
        assert_eq!(batch.text_lens, array![3, 1]);
        assert_eq!(batch.max_text_len, 3);
    }
}
