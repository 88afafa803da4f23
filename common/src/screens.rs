//! 画面（ルート）定義

/// ナビゲーション可能な画面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    FreshProduceAnalyzer,
    ProductExtractor,
}

impl Screen {
    pub const ALL: [Screen; 3] = [
        Screen::Home,
        Screen::FreshProduceAnalyzer,
        Screen::ProductExtractor,
    ];

    /// ホーム画面からリンクされるツール
    pub const TOOLS: [Screen; 2] = [Screen::FreshProduceAnalyzer, Screen::ProductExtractor];

    pub fn path(&self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::FreshProduceAnalyzer => "/fresh-produce-analyzer",
            Screen::ProductExtractor => "/product-extractor",
        }
    }

    /// ルーター用のパスセグメント（先頭スラッシュなし）
    pub fn segment(&self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// 未知のパスはNone（末尾スラッシュは無視）
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|s| s.path() == normalized)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Welcome to FreshTech",
            Screen::FreshProduceAnalyzer => "Fresh Produce Analyzer",
            Screen::ProductExtractor => "Product Extractor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Screen::Home => "Produce freshness and product label tools",
            Screen::FreshProduceAnalyzer => "Analyze and track the freshness of your produce",
            Screen::ProductExtractor => "Extract and manage product information efficiently",
        }
    }

    /// ホーム画面のリンク文言
    pub fn link_label(&self) -> &'static str {
        match self {
            Screen::Home => "Back to Home",
            Screen::FreshProduceAnalyzer => "Go to Analyzer",
            Screen::ProductExtractor => "Go to Extractor",
        }
    }
}
