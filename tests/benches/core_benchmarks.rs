//! # Peernet Core Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | pn-01 Block Codec | encode + sign, decode + recover, parallel batch decode |
//! | pn-02 DHT Policy | eviction decision, find-value fan-out |

use std::sync::Arc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pn_01_block_codec::{decode_block, decode_blocks, encode_block, Block, BlockRecordRaw};
use pn_02_dht_policy::{
    should_evict, DhtPolicy, EvictionCandidate, FindTarget, InfoStore, InformationRequest,
    KademliaPolicy, KeyHash, NetworkError, Node, NodeId, Peer,
};
use rand::RngCore;
use shared_crypto::Secp256k1KeyPair;

fn sample_block(records: usize, record_len: usize) -> Block {
    let mut rng = rand::thread_rng();
    let records = (0..records)
        .map(|i| {
            let mut data = vec![0u8; record_len];
            rng.fill_bytes(&mut data);
            BlockRecordRaw::new(i as u8, data)
        })
        .collect();
    Block::genesis(1, records)
}

// ============================================================================
// pn-01: Block Codec
// ============================================================================

fn bench_block_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("pn-01-block-codec");
    group.measurement_time(Duration::from_secs(10));

    let owner = Secp256k1KeyPair::generate();

    for records in [0usize, 8, 64] {
        let block = sample_block(records, 256);
        let raw = encode_block(&block, &owner).unwrap();
        group.throughput(Throughput::Bytes(raw.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", records), &block, |b, block| {
            b.iter(|| black_box(encode_block(block, &owner).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("decode", records), &raw, |b, raw| {
            b.iter(|| black_box(decode_block(raw).unwrap()))
        });
    }

    for batch in [16usize, 128] {
        let raws: Vec<Vec<u8>> = (0..batch)
            .map(|_| encode_block(&sample_block(4, 128), &owner).unwrap())
            .collect();
        let slices: Vec<&[u8]> = raws.iter().map(Vec::as_slice).collect();

        group.throughput(Throughput::Elements(batch as u64));
        group.bench_with_input(BenchmarkId::new("decode_batch", batch), &slices, |b, slices| {
            b.iter(|| black_box(decode_blocks(slices)))
        });
    }

    group.finish();
}

// ============================================================================
// pn-02: DHT Policy
// ============================================================================

/// Accepts and drops every message.
struct DiscardPeer;

impl Peer for DiscardPeer {
    fn rtt(&self) -> Option<Duration> {
        Some(Duration::from_millis(5))
    }

    fn send_store_announcement(&self, _store: InfoStore) -> Result<(), NetworkError> {
        Ok(())
    }

    fn send_find_node(&self, _target: FindTarget) -> Result<(), NetworkError> {
        Ok(())
    }

    fn send_find_value(&self, _key: KeyHash) -> Result<(), NetworkError> {
        Ok(())
    }
}

fn bench_dht_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("pn-02-dht-policy");

    let local_id = NodeId::new([0x55; 32]);
    let incumbent = EvictionCandidate::new(NodeId::new([0x01; 32]), None);
    let challenger = EvictionCandidate::new(NodeId::new([0x54; 32]), None);
    group.bench_function("should_evict_distance", |b| {
        b.iter(|| black_box(should_evict(&local_id, &incumbent, &challenger)))
    });

    let policy = KademliaPolicy::new(local_id);
    for fan_out in [5usize, 20] {
        let nodes: Vec<Node> = (0..fan_out)
            .map(|i| Node::new(NodeId::new([i as u8; 32]), Arc::new(DiscardPeer)))
            .collect();
        let request = InformationRequest::new([0x99; 32], nodes, false);

        group.throughput(Throughput::Elements(fan_out as u64));
        group.bench_with_input(BenchmarkId::new("find_value", fan_out), &request, |b, request| {
            b.iter(|| black_box(policy.send_request_find_value(request)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_block_codec, bench_dht_policy);
criterion_main!(benches);
