// ============================================================
// Burn Batchers
// ============================================================
// Implements Burn's Batcher trait on top of collate, converting
// the padded ndarray batches into tensors on the target device.
//
// The DataLoader should be built with a batch size of
// batch_size * group_size: each call to FastSpeechBatcher::batch
// then yields group_size padded batches, sorted by length when the
// collate options ask for it.
//
// Integer fields (text ids, lengths, durations) become Int
// tensors, everything else Float tensors.

use std::marker::PhantomData;

use burn::data::dataloader::batcher::Batcher;
use burn::tensor::backend::Backend;
use burn::tensor::{Int, Tensor, TensorData};
use ndarray::{ArrayBase, Data, Dimension};

use crate::data::collate::{collate, collate_text, CollateOptions};
use crate::domain::{Batch, Sample, SpeakerBatch, TextBatch, TextSample};

// ─── Tensor batches ──────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub enum SpeakerTensor<B: Backend> {
    /// [batch]
    Ids(Tensor<B, 1, Int>),
    /// [batch, embedding_dim]
    Embeddings(Tensor<B, 2>),
}

#[derive(Debug, Clone)]
pub struct FastSpeechBatch<B: Backend> {
    pub ids:          Vec<String>,
    pub speakers:     SpeakerTensor<B>,
    /// [batch, max_text_len]
    pub texts:        Tensor<B, 2, Int>,
    /// [batch]
    pub text_lens:    Tensor<B, 1, Int>,
    pub max_text_len: usize,
    /// [batch, max_mel_len, n_mels]
    pub mels:         Tensor<B, 3>,
    /// [batch]
    pub mel_lens:     Tensor<B, 1, Int>,
    pub max_mel_len:  usize,
    pub pitches:      Tensor<B, 2>,
    pub energies:     Tensor<B, 2>,
    pub durations:    Tensor<B, 2, Int>,
    /// [batch, max_text_len, n_mels]
    pub avg_mel_phs:  Tensor<B, 3>,
}

impl<B: Backend> FastSpeechBatch<B> {
    pub fn from_batch(batch: Batch, device: &B::Device) -> Self {
        Self {
            speakers:     speaker_tensor(&batch.speakers, device),
            texts:        int_tensor(&batch.texts, device),
            text_lens:    length_tensor(batch.text_lens.iter().copied(), device),
            max_text_len: batch.max_text_len,
            mels:         float_tensor(&batch.mels, device),
            mel_lens:     length_tensor(batch.mel_lens.iter().copied(), device),
            max_mel_len:  batch.max_mel_len,
            pitches:      float_tensor(&batch.pitches, device),
            energies:     float_tensor(&batch.energies, device),
            durations:    int_tensor(&batch.durations, device),
            avg_mel_phs:  float_tensor(&batch.avg_mel_phs, device),
            ids:          batch.ids,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextTensorBatch<B: Backend> {
    pub ids:          Vec<String>,
    pub speakers:     SpeakerTensor<B>,
    pub texts:        Tensor<B, 2, Int>,
    pub text_lens:    Tensor<B, 1, Int>,
    pub max_text_len: usize,
}

impl<B: Backend> TextTensorBatch<B> {
    pub fn from_batch(batch: TextBatch, device: &B::Device) -> Self {
        Self {
            speakers:     speaker_tensor(&batch.speakers, device),
            texts:        int_tensor(&batch.texts, device),
            text_lens:    length_tensor(batch.text_lens.iter().copied(), device),
            max_text_len: batch.max_text_len,
            ids:          batch.ids,
        }
    }
}

// ─── FastSpeechBatcher ───────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct FastSpeechBatcher<B: Backend> {
    options:  CollateOptions,
    _backend: PhantomData<B>,
}

impl<B: Backend> FastSpeechBatcher<B> {
    pub fn new(options: CollateOptions) -> Self {
        Self { options, _backend: PhantomData }
    }
}

impl<B: Backend> Batcher<B, Sample, Vec<FastSpeechBatch<B>>> for FastSpeechBatcher<B> {
    fn batch(&self, items: Vec<Sample>, device: &B::Device) -> Vec<FastSpeechBatch<B>> {
        // Batcher::batch has no error channel either; see Dataset::get.
        let batches = match collate(&items, self.options) {
            Ok(batches) => batches,
            Err(e) => {
                tracing::error!("Failed to collate {} samples: {e}", items.len());
                panic!("failed to collate {} samples: {e}", items.len());
            }
        };
        batches
            .into_iter()
            .map(|batch| FastSpeechBatch::from_batch(batch, device))
            .collect()
    }
}

// ─── TextBatcher ─────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Default)]
pub struct TextBatcher<B: Backend> {
    _backend: PhantomData<B>,
}

impl<B: Backend> TextBatcher<B> {
    pub fn new() -> Self {
        Self { _backend: PhantomData }
    }
}

impl<B: Backend> Batcher<B, TextSample, TextTensorBatch<B>> for TextBatcher<B> {
    fn batch(&self, items: Vec<TextSample>, device: &B::Device) -> TextTensorBatch<B> {
        match collate_text(&items) {
            Ok(batch) => TextTensorBatch::from_batch(batch, device),
            Err(e) => {
                tracing::error!("Failed to collate {} text samples: {e}", items.len());
                panic!("failed to collate {} text samples: {e}", items.len());
            }
        }
    }
}

// ─── ndarray → Tensor ────────────────────────────────────────────────────────
fn shape_of<D: Dimension, const N: usize>(dim: D) -> [usize; N] {
    let mut shape = [0; N];
    shape.copy_from_slice(dim.slice());
    shape
}

fn float_tensor<B, S, D, const N: usize>(array: &ArrayBase<S, D>, device: &B::Device) -> Tensor<B, N>
where
    B: Backend,
    S: Data<Elem = f32>,
    D: Dimension,
{
    let values: Vec<f32> = array.iter().copied().collect();
    let data = TensorData::new(values, shape_of::<D, N>(array.raw_dim()));
    Tensor::from_data(data.convert::<B::FloatElem>(), device)
}

fn int_tensor<B, S, D, const N: usize>(
    array:  &ArrayBase<S, D>,
    device: &B::Device,
) -> Tensor<B, N, Int>
where
    B: Backend,
    S: Data<Elem = i64>,
    D: Dimension,
{
    let values: Vec<i64> = array.iter().copied().collect();
    let data = TensorData::new(values, shape_of::<D, N>(array.raw_dim()));
    Tensor::from_data(data.convert::<B::IntElem>(), device)
}

fn length_tensor<B: Backend>(
    lengths: impl ExactSizeIterator<Item = usize>,
    device:  &B::Device,
) -> Tensor<B, 1, Int> {
    let values: Vec<i64> = lengths.map(|l| l as i64).collect();
    let n = values.len();
    Tensor::from_data(TensorData::new(values, [n]).convert::<B::IntElem>(), device)
}

fn speaker_tensor<B: Backend>(speakers: &SpeakerBatch, device: &B::Device) -> SpeakerTensor<B> {
    match speakers {
        SpeakerBatch::Ids(ids) => SpeakerTensor::Ids(int_tensor(ids, device)),
        SpeakerBatch::Embeddings(e) => SpeakerTensor::Embeddings(float_tensor(e, device)),
    }
}
