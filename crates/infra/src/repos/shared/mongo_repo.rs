use anyhow::Result;
use futures::stream::TryStreamExt;
use mongodb::{bson::Document, Collection};
use serde::{de::DeserializeOwned, Serialize};

pub trait MongoDocument<E>: Serialize + DeserializeOwned + Unpin + Send + Sync {
    fn to_domain(self) -> Result<E>;
    fn from_domain(entity: &E) -> Self;
    fn get_id_filter(&self) -> Document;
}

pub async fn insert<E, D: MongoDocument<E>>(collection: &Collection<D>, entity: &E) -> Result<()> {
    let raw = D::from_domain(entity);
    collection.insert_one(raw, None).await?;
    Ok(())
}

/// Replaces the document with the same id as `entity`. Returns `false`
/// if no document matched.
pub async fn replace<E, D: MongoDocument<E>>(
    collection: &Collection<D>,
    entity: &E,
) -> Result<bool> {
    let raw = D::from_domain(entity);
    let filter = raw.get_id_filter();
    let res = collection.replace_one(filter, &raw, None).await?;
    Ok(res.matched_count > 0)
}

pub async fn find_many_by<E, D: MongoDocument<E>>(
    collection: &Collection<D>,
    filter: Document,
) -> Result<Vec<E>> {
    let cursor = collection.find(filter, None).await?;
    let documents: Vec<D> = cursor.try_collect().await?;
    documents.into_iter().map(|doc| doc.to_domain()).collect()
}

pub async fn delete_many_by<E, D: MongoDocument<E>>(
    collection: &Collection<D>,
    filter: Document,
) -> Result<u64> {
    let res = collection.delete_many(filter, None).await?;
    Ok(res.deleted_count)
}
