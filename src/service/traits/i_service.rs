use async_trait::async_trait;

use crate::error::Result;
use crate::models::conversion::{Invocation, ProcessOutcome};

// 子行程執行接口，負責啟動外部程式並等待結束
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// 執行一次外部程式
    /// # 參數
    /// - invocation: 程式路徑、參數、標準輸入內容與逾時設定
    /// # 回傳
    /// - 結束碼為 0 時返回結束狀態，否則依結束碼表返回對應錯誤
    async fn run(&self, invocation: Invocation) -> Result<ProcessOutcome>;
}
