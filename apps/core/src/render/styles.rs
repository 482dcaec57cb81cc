//! Component stylesheets, injected once into the page head.

pub const DASHBOARD: &str = r"
.dashboard-header { margin-bottom: 20px; text-align: center; }
.dashboard-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 20px; margin-bottom: 30px; }
.dashboard-card { background: white; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); overflow: hidden; }
.card-header { background: linear-gradient(45deg, #007bff, #0056b3); color: white; padding: 15px; }
.card-header h4 { margin: 0; }
.card-body { padding: 15px; }
.chart-container { margin: 10px 0; text-align: center; }
.chart-container img { max-width: 100%; border-radius: 5px; }
.correlation-list, .pattern-list { list-style: none; padding: 0; margin: 0; }
.correlation-list li, .pattern-list li { padding: 8px 0; border-bottom: 1px solid #eee; }
.correlation-list li:last-child, .pattern-list li:last-child { border-bottom: none; }
.correlation-list .positive { color: #28a745; }
.correlation-list .negative { color: #dc3545; }
.var-names { font-weight: bold; }
.corr-value { margin-left: 10px; }
.corr-desc { color: #6c757d; font-size: 0.9em; margin-left: 5px; }
.groups-summary { display: flex; justify-content: space-around; margin-bottom: 15px; }
.summary-item { text-align: center; }
.summary-value { font-size: 2em; font-weight: bold; color: #007bff; }
.summary-label { color: #6c757d; }
.groups-list { display: flex; flex-direction: column; gap: 10px; }
.group-card { border: 1px solid #dee2e6; border-radius: 5px; overflow: hidden; }
.group-header { background: #f8f9fa; padding: 8px 12px; font-weight: bold; border-bottom: 1px solid #dee2e6; }
.group-details { padding: 10px; }
.group-details p { margin: 5px 0; }
.view-map-button { margin-top: 15px; text-align: center; }
.vessel-groups-map { margin-top: 20px; height: 500px; border-radius: 10px; overflow: hidden; border: 1px solid #dee2e6; }
.error-message { color: #dc3545; padding: 10px; background: #f8d7da; border-radius: 5px; margin: 10px 0; }
.loading { display: inline-block; width: 30px; height: 30px; border: 3px solid rgba(0,123,255,0.3); border-radius: 50%; border-top-color: #007bff; animation: spin 1s ease-in-out infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
";

pub const RISK: &str = r"
.risk-stats { display: flex; flex-wrap: wrap; gap: 15px; margin: 20px 0; }
.risk-stat-card { background: white; padding: 15px; border-radius: 8px; text-align: center; box-shadow: 0 2px 5px rgba(0,0,0,0.1); flex: 1; min-width: 100px; }
.stat-number { font-size: 2em; font-weight: bold; color: #007bff; }
.stat-label { margin-top: 5px; color: #6c757d; }
.risky-routes-container { display: flex; flex-direction: column; gap: 15px; }
.risky-route-card { display: flex; background: white; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 5px rgba(0,0,0,0.1); }
.risk-score { display: flex; align-items: center; justify-content: center; width: 80px; font-size: 24px; font-weight: bold; color: white; }
.route-details { flex: 1; padding: 15px; }
.risk-factors { margin-top: 10px; }
.risk-factor { height: 20px; margin-bottom: 5px; background: linear-gradient(90deg, #007bff, #0056b3); color: white; font-size: 12px; line-height: 20px; padding: 0 8px; border-radius: 3px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.map-frame { display: block; min-height: 500px; }
";

pub const WELCOME: &str = r"
.welcome-message { position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); background: white; border-radius: 10px; box-shadow: 0 5px 25px rgba(0,0,0,0.2); width: 90%; max-width: 600px; z-index: 1000; animation: fadeIn 0.5s; }
.welcome-header { display: flex; justify-content: space-between; align-items: center; padding: 15px 20px; background: linear-gradient(45deg, #007bff, #0056b3); color: white; border-radius: 10px 10px 0 0; }
.welcome-header h3 { margin: 0; }
.close-btn { background: none; border: none; color: white; font-size: 24px; cursor: pointer; }
.welcome-content { padding: 20px; }
@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
";

pub const TOAST: &str = r"
.map-toast { position: absolute; top: 10px; left: 50%; transform: translateX(-50%); background: rgba(40, 167, 69, 0.9); color: white; padding: 10px 20px; border-radius: 5px; font-weight: bold; z-index: 1000; transition: opacity 0.5s; }
.map-toast.fading { opacity: 0; }
";

/// Every stylesheet, in injection order.
pub const ALL: [&str; 4] = [DASHBOARD, RISK, WELCOME, TOAST];
