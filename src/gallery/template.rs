//! Base page for a fresh gallery document.
//!
//! The markup, class names and the `copyPrompt(card, text)` signature are a
//! contract with every card already written into existing galleries.

/// Full page written when `index.html` does not exist yet
pub const BASE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Visual Prompt Library</title>
    <style>
        body { background-color: #121212; color: #fff; font-family: sans-serif; margin: 0; padding: 10px; }
        h1 { text-align: center; font-size: 1.2rem; color: #888; margin-bottom: 20px;}
        .gallery-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
            gap: 10px;
        }
        .card {
            position: relative;
            border-radius: 8px;
            overflow: hidden;
            aspect-ratio: 1 / 1;
            cursor: pointer;
            background: #222;
            transition: transform 0.1s;
        }
        .card:active { transform: scale(0.98); }
        .card img { width: 100%; height: 100%; object-fit: cover; }
        .overlay {
            position: absolute; bottom: 0; left: 0; right: 0;
            background: rgba(0,0,0,0.8); color: white;
            font-size: 12px; text-align: center; padding: 8px;
            opacity: 0; transition: opacity 0.2s;
        }
        .card:hover .overlay { opacity: 1; }
        @media (hover: none) { .overlay { opacity: 1; background: rgba(0,0,0,0.5); } }
        
        /* Toast */
        #toast {
            visibility: hidden; min-width: 200px; background-color: #4CAF50;
            color: white; text-align: center; border-radius: 4px; padding: 12px;
            position: fixed; z-index: 1; bottom: 30px; left: 50%;
            transform: translateX(-50%); font-size: 14px; box-shadow: 0 4px 12px rgba(0,0,0,0.3);
        }
        #toast.show { visibility: visible; animation: fadein 0.3s, fadeout 0.3s 2.0s; }
        @keyframes fadein { from {bottom: 0; opacity: 0;} to {bottom: 30px; opacity: 1;} }
        @keyframes fadeout { from {bottom: 30px; opacity: 1;} to {bottom: 0; opacity: 0;} }
    </style>
</head>
<body>
    <h1>My Prompts</h1>
    <div class="gallery-grid"></div>
    <div id="toast">Copied!</div>
    <script>
        function copyPrompt(card, text) {
            navigator.clipboard.writeText(text).then(function() {
                var x = document.getElementById("toast");
                x.className = "show";
                setTimeout(function(){ x.className = x.className.replace("show", ""); }, 2300);
            });
        }
    </script>
</body>
</html>"#;
