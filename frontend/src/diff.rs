//! 拼写差异高亮模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM：把用户的拼写与正确拼写做
//! 逐字符对齐（最长公共子序列），输出标注片段供视图渲染。
//! 多余字符渲染为删除线，缺失字符渲染为下划线插入。

/// 片段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// 两边一致
    Match,
    /// 只出现在用户拼写里（多打的字符，渲染为删除线）
    Extra,
    /// 只出现在正确拼写里（漏掉的字符，渲染为下划线插入）
    Missing,
}

/// 标注片段：连续同类字符合并为一段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    pub text: String,
    pub kind: SegmentKind,
}

/// 对齐用户拼写与正确拼写
///
/// 完全一致时返回单个 `Match` 片段（空串返回空列表）。
/// 不变量：
/// - `Match` + `Extra` 片段按序拼接等于用户拼写
/// - `Match` + `Missing` 片段按序拼接等于正确拼写
pub fn diff_spelling(attempt: &str, correct: &str) -> Vec<DiffSegment> {
    let a: Vec<char> = attempt.chars().collect();
    let c: Vec<char> = correct.chars().collect();

    if a == c {
        if a.is_empty() {
            return Vec::new();
        }
        return vec![DiffSegment {
            text: attempt.to_string(),
            kind: SegmentKind::Match,
        }];
    }

    // dp[i][j] = a[i..] 与 c[j..] 的最长公共子序列长度
    let (n, m) = (a.len(), c.len());
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i][j] = if a[i] == c[j] {
                dp[i + 1][j + 1] + 1
            } else {
                dp[i + 1][j].max(dp[i][j + 1])
            };
        }
    }

    // 回走产生逐字符操作序列
    let mut ops: Vec<(SegmentKind, char)> = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == c[j] {
            ops.push((SegmentKind::Match, a[i]));
            i += 1;
            j += 1;
        } else if dp[i + 1][j] >= dp[i][j + 1] {
            ops.push((SegmentKind::Extra, a[i]));
            i += 1;
        } else {
            ops.push((SegmentKind::Missing, c[j]));
            j += 1;
        }
    }
    while i < n {
        ops.push((SegmentKind::Extra, a[i]));
        i += 1;
    }
    while j < m {
        ops.push((SegmentKind::Missing, c[j]));
        j += 1;
    }

    // 合并连续同类字符
    let mut segments: Vec<DiffSegment> = Vec::new();
    for (kind, ch) in ops {
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push(ch),
            _ => segments.push(DiffSegment {
                text: ch.to_string(),
                kind,
            }),
        }
    }
    segments
}

#[cfg(test)]
mod tests;
