//! Text templates for the notes document and the solution stub.

use super::NewProblem;
use super::layout::leetcode_url;
use crate::utils::config::DEFAULT_COMPANY_FREQUENCY;

/// Render `readme.md`: YAML front matter followed by the notes skeleton
pub fn render_readme(problem: &NewProblem) -> String {
    let title = &problem.title;
    let id = problem.problem_id;
    let pattern = &problem.pattern;
    let difficulty = problem.difficulty;
    let url = leetcode_url(title);
    let tags = format!("[{}]", problem.tags.join(", "));

    format!(
        r#"---
title: "{title}"
leetcode: {id}
tags: {tags}
difficulty: {difficulty}
pattern: {pattern}
attempts: 0
total_time_min: 0
solved_date: ""
---

# {title}

**LeetCode Link**: [Problem #{id}]({url})

## Problem Statement

<Copy the problem statement here>

## Examples

```
Input: <example input>
Output: <example output>
Explanation: <explanation>
```

## Constraints

- <constraint 1>
- <constraint 2>

## Approach

### Pattern: {pattern}

<Detailed explanation of the approach>

### Algorithm Steps

1. <Step 1>
2. <Step 2>

### Time Complexity
**O(<complexity>)**

### Space Complexity
**O(<complexity>)**

## Solution

```cpp
<Solution code here>
```

## Alternative Approaches

### Approach 2: <Alternative Pattern>
<Brief description>

## Test Cases

| Input | Output | Explanation |
|-------|--------|-------------|
| `<input1>` | `<output1>` | `<explanation1>` |

## Edge Cases

- <Edge case 1>

## Common Mistakes

1. <Mistake 1>

## Learning Notes

- <Key insight 1>

## Related Problems

- [Related Problem 1](link)

## Time Log

| Date | Sprint (min) | Phase | Progress | Notes |
|------|--------------|-------|----------|-------|
| <YYYY-MM-DD> | <duration> | <learn/implement/review> | <stuck/partial/solved> | <notes> |

## Metrics

- **Attempts**: 0
- **Total Time**: 0 minutes
- **Pattern Mastery**: No
- **Company Frequency**: {company}
- **Difficulty Rating**: 0/5
"#,
        company = DEFAULT_COMPANY_FREQUENCY,
    )
}

/// Render `solution.cpp`: a C++ stub with a stdin test harness
pub fn render_solution(problem: &NewProblem) -> String {
    let title = &problem.title;
    let id = problem.problem_id;
    let pattern = &problem.pattern;

    format!(
        r#"#include "cpp-template.h"

// Problem: {title} - LeetCode #{id}
/*
Approach:
- Pattern: {pattern}
- Idea: <Brief 3-line explanation>
- Complexity: Time O(...), Space O(...)
*/

class Solution {{
public:
    int solve(vector<int>& nums) {{
        return 0;
    }}
}};

class SolutionAlternative {{
public:
    int solve(vector<int>& nums) {{
        return 0;
    }}
}};

// Local test harness for quick runs
int main() {{
    int n;
    if (!(cin >> n)) return 0;

    vector<int> nums(n);
    for (int i = 0; i < n; i++) {{
        cin >> nums[i];
    }}

    Solution sol;
    cout << sol.solve(nums) << "\n";

    return 0;
}}

/*
Test Cases:
Input: [1, 2, 3, 4, 5]
Output: <expected output>

Edge Cases:
- Empty array: []
- Single element: [1]
*/
"#
    )
}
