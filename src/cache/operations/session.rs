use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;

use crate::cache::keys::SESSION_KEY;
use crate::cache::models::session::{SessionRecord, SessionSnapshot};
use crate::cache::storage::Storage;
use crate::error::Result;

/// 会话记录存储
///
/// 记录以 JSON 形式持久化；每次写入后通过 watch 通道通知观察者。
/// 这里不做任何校验，只负责读写和通知。
pub struct TokenStore {
    storage: Arc<dyn Storage>,
    tx: watch::Sender<Arc<SessionSnapshot>>,
}

impl TokenStore {
    /// 从存储中读出已有记录作为初始快照
    pub async fn open(storage: Arc<dyn Storage>) -> Self {
        let record = read_record(storage.as_ref()).await;
        let (tx, _rx) = watch::channel(Arc::new(SessionSnapshot::new(record)));
        Self { storage, tx }
    }

    /// 读取当前会话记录；不存在、损坏或读取失败时返回未登录的空记录
    pub async fn get(&self) -> SessionRecord {
        read_record(self.storage.as_ref()).await
    }

    /// 持久化新记录并通知观察者
    pub async fn set(&self, record: SessionRecord) -> Result<()> {
        let json = serde_json::to_string(&record)?;
        self.storage.save(SESSION_KEY, &json).await?;

        tracing::debug!(
            username = ?record.username,
            logged_in = record.logged_in,
            "Session record updated"
        );
        self.tx.send_replace(Arc::new(SessionSnapshot::new(record)));
        Ok(())
    }

    /// 清空会话（登出或刷新彻底失败）
    pub async fn clear(&self) -> Result<()> {
        self.storage.remove(SESSION_KEY).await?;

        tracing::debug!("Session record cleared");
        self.tx
            .send_replace(Arc::new(SessionSnapshot::new(SessionRecord::default())));
        Ok(())
    }

    /// 最近一次写入（或打开时读到）的快照
    pub fn snapshot(&self) -> Arc<SessionSnapshot> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<SessionSnapshot>> {
        self.tx.subscribe()
    }
}

async fn read_record(storage: &dyn Storage) -> SessionRecord {
    let json = match storage.load(SESSION_KEY).await {
        Ok(Some(json)) => json,
        Ok(None) => return SessionRecord::default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read session record, treating as logged out");
            return SessionRecord::default();
        }
    };

    match serde_json::from_str::<SessionRecord>(&json) {
        Ok(record) => record.normalized(Utc::now()),
        Err(e) => {
            tracing::warn!(error = %e, "Corrupt session record, treating as logged out");
            SessionRecord::default()
        }
    }
}
