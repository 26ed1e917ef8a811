use serde_json::{Value, json};

/// A full sectioned-dialect report.
pub fn sectioned_report() -> Value {
    json!({
        "metadata": {"type": "equity", "subject": "ACME Corp", "title": "ACME Q3"},
        "sections": {
            "cover": {
                "headline": "Margins recover",
                "subheadline": "Third quarter in review",
                "rating": "BUY",
                "hero_metrics": [
                    {"label": "Net Revenue", "value": 2500000, "unit": "$", "delta": 12.5},
                    {"label": "Gross Margin", "value": 41, "unit": "%", "delta": -1.5, "delta_period": "QoQ"}
                ]
            },
            "executive_summary": {
                "key_points": ["Revenue beat guidance", "Costs under control"],
                "highlights": [
                    {"label": "Net Revenue", "value": 1},
                    {"label": "Headcount", "value": 870}
                ],
                "primary_chart": {
                    "title": "Revenue by Quarter",
                    "labels": ["Q1", "Q2", "Q3"],
                    "datasets": [{"label": "Revenue", "data": [1.9, 2.1, 2.5]}]
                }
            },
            "data_analysis": [
                {
                    "title": "Segments",
                    "narrative": "Cloud led growth.",
                    "insights": [{"headline": "Cloud up", "body": "Cloud grew 30%", "source": "10-Q"}],
                    "visualizations": [{"labels": ["A", "B"], "datasets": [{"data": [1, 2]}]}],
                    "data": {"columns": ["segment", "revenue"], "rows": [["Cloud", 900], ["Devices", 600]]}
                }
            ],
            "risks": {
                "risks": [{"title": "FX", "description": "Dollar strength", "probability": "High"}]
            },
            "recommendation": {"action": "Buy", "target": 145, "rationale": "Upside to consensus"}
        }
    })
}

/// A flat legacy-dialect report with a comparison block.
pub fn legacy_report() -> Value {
    json!({
        "metrics": {
            "revenue": {"label": "Revenue", "value": 1500000, "unit": "$", "format": "currency", "delta": 8},
            "churn": {"value": 3, "unit": "%", "delta": -0.5},
            "nps": 42
        },
        "time_series": {
            "labels": ["Jan", "Feb", "Mar"],
            "datasets": [
                {"label": "2024", "data": [10, 12, 15]},
                {"label": "2023", "data": [8, 9]}
            ]
        },
        "categories": {
            "title": "By Region",
            "labels": ["North", "South"],
            "datasets": [{"label": "Units", "data": [300, 200]}]
        },
        "table": {"columns": ["region", "units"], "rows": [["North", 300], ["South", 200]]},
        "insights": [
            {"headline": "North leads", "body": "Sixty percent of units"},
            {"headline": "South steady", "body": "Flat year over year"},
            {"headline": "West pending", "body": "Data arrives next week"}
        ]
    })
}

/// Arbitrary JSON exercising every shape.
pub fn arbitrary_mix() -> Value {
    json!({
        "total_revenue": 1234567,
        "growth_rate": 4.2,
        "weekly_orders": [120, 135, 150, 160],
        "products": [{"name": "A", "sales": 5}, {"name": "B", "sales": 3}],
        "analyst_commentary": "Demand held up better than expected across every region this quarter.",
        "flags": true,
        "nested": {"unrelated": {"deep": 1}}
    })
}
