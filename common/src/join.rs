//! 並列実行の結合

use std::future::Future;

use futures::future::try_join;

/// 2つのFutureを並列に進め、両方の成功を待つ
///
/// どちらかが失敗した時点でそのエラーを返し、もう一方は破棄する
/// （部分的な成功は返さない）。
pub async fn join_all_or_nothing<A, B, T, U, E>(a: A, b: B) -> Result<(T, U), E>
where
    A: Future<Output = Result<T, E>>,
    B: Future<Output = Result<U, E>>,
{
    try_join(a, b).await
}
