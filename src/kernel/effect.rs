//! 副作用：内核返回给宿主执行的指令

use compact_str::CompactString;

use crate::content::NodePath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// 滚动到内容区顶部
    ScrollToTop,
    /// 滚动到首个匹配的高亮标记；宿主应在切节滚动安定后再定位
    ScrollToMatch { section: usize, locator: NodePath },
    /// 新展开的折叠块滚入视野
    ScrollToBlock { id: CompactString },
    /// 把当前节写入 URL 锚点
    UpdateHash(CompactString),
    /// 屏幕阅读器播报
    Announce(String),
}
