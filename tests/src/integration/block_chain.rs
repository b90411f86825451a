//! # Block Chain Flows
//!
//! Blocks signed by a node identity, linked by content hash and kept in the
//! node's warehouse.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::Result;
    use node_runtime::{NodeConfig, NodeRuntime};
    use pn_01_block_codec::{decode_block, decode_blocks, encode_block, BlockRecordRaw};
    use pn_02_dht_policy::test_utils::MockDhtEngine;
    use pn_02_dht_policy::DhtEngine;
    use pn_03_data_store::{data_to_hash, DataStoreApi};

    fn runtime() -> (NodeRuntime, Arc<MockDhtEngine>) {
        let engine = Arc::new(MockDhtEngine::new());
        let handle = Arc::clone(&engine);
        let runtime = NodeRuntime::new(NodeConfig::default(), move |_, _, _| -> Result<Arc<dyn DhtEngine>> {
            Ok(handle as Arc<dyn DhtEngine>)
        })
        .unwrap();
        (runtime, engine)
    }

    #[tokio::test]
    async fn test_chain_grows_from_stored_genesis() {
        let (runtime, _) = runtime();
        let store = runtime.data_store().unwrap();
        let genesis_hash = runtime.start().await.unwrap();

        let genesis_raw = store.get_data(&genesis_hash).await.unwrap().unwrap().data;
        let genesis = decode_block(&genesis_raw).unwrap();

        let block_1 = genesis
            .successor(&genesis_raw, vec![BlockRecordRaw::new(1, b"file".to_vec())])
            .unwrap();
        let raw_1 = encode_block(&block_1, runtime.identity()).unwrap();
        let hash_1 = store.store_data_local(&raw_1).await.unwrap();

        let decoded = decode_block(&store.get_data(&hash_1).await.unwrap().unwrap().data).unwrap();
        assert_eq!(decoded.number, 1);
        assert_eq!(decoded.last_block_hash, genesis_hash.to_vec());
        assert_eq!(decoded.owner_public_key, Some(runtime.identity().public_key()));
    }

    #[tokio::test]
    async fn test_published_block_is_announced_with_its_size() {
        let (runtime, engine) = runtime();
        let store = runtime.data_store().unwrap();
        runtime.start().await.unwrap();

        let genesis_raw = encode_block(
            &pn_01_block_codec::Block::genesis(0, Vec::new()),
            runtime.identity(),
        )
        .unwrap();
        let hash = store.store_data_dht(&genesis_raw).await.unwrap();

        assert_eq!(engine.stores(), vec![(hash, genesis_raw.len() as u64)]);
        assert_eq!(hash, data_to_hash(&genesis_raw));
    }

    #[test]
    fn test_batch_decode_of_a_chain() {
        let (runtime, _) = runtime();
        let owner = runtime.identity();

        let mut raws = Vec::new();
        let mut block = pn_01_block_codec::Block::genesis(2, Vec::new());
        for n in 0..5u8 {
            let raw = encode_block(&block, owner).unwrap();
            block = block
                .successor(&raw, vec![BlockRecordRaw::new(n, vec![n; 16])])
                .unwrap();
            raws.push(raw);
        }

        let slices: Vec<&[u8]> = raws.iter().map(Vec::as_slice).collect();
        let decoded = decode_blocks(&slices);

        for (n, result) in decoded.into_iter().enumerate() {
            let block = result.unwrap();
            assert_eq!(block.number, n as u64);
            assert_eq!(block.owner_public_key, Some(owner.public_key()));
            if n > 0 {
                assert_eq!(block.last_block_hash, data_to_hash(&raws[n - 1]).to_vec());
            }
        }
    }

    #[tokio::test]
    async fn test_shutdown_after_start() {
        let (mut runtime, engine) = runtime();
        runtime.start().await.unwrap();

        runtime.shutdown();

        assert!(runtime.data_store().is_err());
        assert_eq!(Arc::strong_count(&engine), 1);
    }
}
