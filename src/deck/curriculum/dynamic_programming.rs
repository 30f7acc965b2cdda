use crate::deck::{Slide, Topic};

pub(super) const TOPIC: Topic = Topic {
    id: 5,
    name: "Greedy & Dynamic Programming",
    duration: "1 hour",
    slides: SLIDES,
};

const SLIDES: &[Slide] = &[
    Slide::Title {
        title: "Greedy & Dynamic Programming",
        subtitle: "Optimization Algorithms in JavaScript",
        description: "Master problem-solving with optimal substructure",
    },
    Slide::Content {
        title: "What is Greedy Algorithm?",
        points: &[
            "Makes locally optimal choice at each step",
            "Hopes local optimum leads to global optimum",
            "**Fast**: One pass through data usually",
            "**Simple**: Easy to code and understand",
            "Doesn't always give optimal solution",
            "Works when: Problem has greedy choice property",
        ],
        diagram: false,
    },
    Slide::Content {
        title: "Greedy vs Dynamic Programming",
        points: &[
            "**Greedy**: Makes irrevocable choices, no backtracking",
            "**DP**: Explores all possibilities, picks best",
            "**Greedy**: Faster, less memory",
            "**DP**: Slower but guarantees optimal solution",
            "Use greedy when local optimum = global optimum",
            "Use DP when need to consider all subproblems",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "Greedy - Activity Selection",
        description: Some("Select maximum non-overlapping activities"),
        code: r#"// Activity Selection Problem
// Select max number of non-overlapping activities

function activitySelection(activities) {
  // Sort by end time
  activities.sort((a, b) => a.end - b.end);

  const selected = [activities[0]];
  let lastEnd = activities[0].end;

  for (let i = 1; i < activities.length; i++) {
    // If current starts after last selected ends
    if (activities[i].start >= lastEnd) {
      selected.push(activities[i]);
      lastEnd = activities[i].end;
    }
  }

  return selected;
}

// Usage
const activities = [
  { name: 'A', start: 1, end: 3 },
  { name: 'B', start: 2, end: 4 },
  { name: 'C', start: 3, end: 5 },
  { name: 'D', start: 0, end: 6 },
  { name: 'E', start: 5, end: 7 },
  { name: 'F', start: 8, end: 9 }
];

console.log(activitySelection(activities));
// Output: [A, C, E, F] - Maximum 4 activities

// Time: O(n log n), Space: O(1)"#,
    },
    Slide::Code {
        title: "Greedy - Fractional Knapsack",
        description: Some("Maximize value with weight constraint"),
        code: r#"// Fractional Knapsack Problem
// Can take fraction of items

function fractionalKnapsack(items, capacity) {
  // Calculate value per weight ratio
  items.forEach(item => {
    item.ratio = item.value / item.weight;
  });

  // Sort by ratio (descending)
  items.sort((a, b) => b.ratio - a.ratio);

  let totalValue = 0;
  let remainingCapacity = capacity;

  for (let item of items) {
    if (remainingCapacity >= item.weight) {
      // Take full item
      totalValue += item.value;
      remainingCapacity -= item.weight;
    } else {
      // Take fraction
      totalValue += item.ratio * remainingCapacity;
      break;
    }
  }

  return totalValue;
}

// Usage
const items = [
  { weight: 10, value: 60 },  // ratio: 6
  { weight: 20, value: 100 }, // ratio: 5
  { weight: 30, value: 120 }  // ratio: 4
];

console.log(fractionalKnapsack(items, 50));
// Output: 240 (60 + 100 + 80)

// Time: O(n log n), Space: O(1)"#,
    },
    Slide::Code {
        title: "Greedy - Coin Change (Greedy)",
        description: Some("Make change using minimum coins"),
        code: r#"// Coin Change - Greedy Approach
// Works only for some coin systems (like US coins)

function coinChangeGreedy(coins, amount) {
  // Sort coins in descending order
  coins.sort((a, b) => b - a);

  const result = [];
  let remaining = amount;

  for (let coin of coins) {
    while (remaining >= coin) {
      result.push(coin);
      remaining -= coin;
    }
  }

  return remaining === 0 ? result : null;
}

// Usage
const coins = [25, 10, 5, 1];  // US coins
console.log(coinChangeGreedy(coins, 63));
// Output: [25, 25, 10, 1, 1, 1]

// Time: O(n log n + amount), Space: O(1)

// Note: Greedy doesn't always work
// Example: coins = [1, 3, 4], amount = 6
// Greedy: [4, 1, 1] = 3 coins
// Optimal: [3, 3] = 2 coins
// Need DP for optimal solution!"#,
    },
    Slide::Code {
        title: "Greedy - Huffman Coding",
        description: Some("Data compression using binary tree"),
        code: r#"// Huffman Coding - Optimal prefix codes
class HuffmanNode {
  constructor(char, freq) {
    this.char = char;
    this.freq = freq;
    this.left = null;
    this.right = null;
  }
}

function huffmanCoding(text) {
  // Count frequencies
  const freq = {};
  for (let char of text) {
    freq[char] = (freq[char] || 0) + 1;
  }

  // Create min heap of nodes
  const heap = Object.entries(freq).map(([char, f]) =>
    new HuffmanNode(char, f)
  );

  // Build Huffman tree
  while (heap.length > 1) {
    heap.sort((a, b) => a.freq - b.freq);

    const left = heap.shift();
    const right = heap.shift();

    const parent = new HuffmanNode(null, left.freq + right.freq);
    parent.left = left;
    parent.right = right;

    heap.push(parent);
  }

  // Generate codes
  const codes = {};
  function generateCodes(node, code = '') {
    if (!node) return;
    if (node.char) codes[node.char] = code;
    generateCodes(node.left, code + '0');
    generateCodes(node.right, code + '1');
  }

  generateCodes(heap[0]);
  return codes;
}

console.log(huffmanCoding("hello"));
// Output: { h: '00', e: '01', l: '1', o: '10' }"#,
    },
    Slide::Content {
        title: "Dynamic Programming (DP)",
        points: &[
            "Break problem into overlapping subproblems",
            "Store results to avoid recomputation",
            "**Memoization**: Top-down with recursion",
            "**Tabulation**: Bottom-up with iteration",
            "Requires: Optimal substructure + overlapping subproblems",
            "Applications: Optimization, counting, decision problems",
        ],
        diagram: false,
    },
    Slide::Content {
        title: "DP Steps to Solve",
        points: &[
            "1. **Identify**: Can be broken into subproblems?",
            "2. **Recurrence**: Define relationship between problems",
            "3. **Base Case**: Simplest subproblem solution",
            "4. **Memoize/Tabulate**: Store intermediate results",
            "5. **Build Up**: Solve from base to original problem",
            "6. **Extract Solution**: Get final answer",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "DP - Fibonacci (Classic Example)",
        description: Some("Comparing approaches"),
        code: r#"// 1. Naive Recursion - O(2^n)
function fibNaive(n) {
  if (n <= 1) return n;
  return fibNaive(n - 1) + fibNaive(n - 2);
}

// 2. Memoization (Top-Down DP) - O(n)
function fibMemo(n, memo = {}) {
  if (n <= 1) return n;
  if (memo[n]) return memo[n];

  memo[n] = fibMemo(n - 1, memo) + fibMemo(n - 2, memo);
  return memo[n];
}

// 3. Tabulation (Bottom-Up DP) - O(n)
function fibTab(n) {
  if (n <= 1) return n;

  const dp = [0, 1];
  for (let i = 2; i <= n; i++) {
    dp[i] = dp[i - 1] + dp[i - 2];
  }
  return dp[n];
}

// 4. Space Optimized - O(1) space
function fibOptimized(n) {
  if (n <= 1) return n;

  let prev = 0, curr = 1;
  for (let i = 2; i <= n; i++) {
    [prev, curr] = [curr, prev + curr];
  }
  return curr;
}

console.log(fibMemo(10));      // 55
console.log(fibTab(10));       // 55
console.log(fibOptimized(10)); // 55"#,
    },
    Slide::Code {
        title: "DP - Climbing Stairs",
        description: Some("How many ways to reach top"),
        code: r#"// Climbing Stairs Problem
// Can climb 1 or 2 steps at a time
// How many distinct ways to climb n steps?

function climbStairs(n) {
  if (n <= 2) return n;

  const dp = [0, 1, 2];

  for (let i = 3; i <= n; i++) {
    // Ways to reach step i =
    // (ways to i-1) + (ways to i-2)
    dp[i] = dp[i - 1] + dp[i - 2];
  }

  return dp[n];
}

// Space optimized
function climbStairsOptimized(n) {
  if (n <= 2) return n;

  let oneStep = 2, twoSteps = 1;

  for (let i = 3; i <= n; i++) {
    const current = oneStep + twoSteps;
    twoSteps = oneStep;
    oneStep = current;
  }

  return oneStep;
}

console.log(climbStairs(5));  // 8 ways
// [1,1,1,1,1], [1,1,1,2], [1,1,2,1], [1,2,1,1],
// [2,1,1,1], [1,2,2], [2,1,2], [2,2,1]

// Time: O(n), Space: O(1)"#,
    },
    Slide::Code {
        title: "DP - Coin Change (Optimal)",
        description: Some("Minimum coins to make amount"),
        code: r#"// Coin Change - Minimum Coins
// DP gives optimal solution (unlike greedy)

function coinChange(coins, amount) {
  // dp[i] = min coins needed for amount i
  const dp = Array(amount + 1).fill(Infinity);
  dp[0] = 0;  // Base case: 0 amount needs 0 coins

  for (let i = 1; i <= amount; i++) {
    for (let coin of coins) {
      if (i >= coin) {
        dp[i] = Math.min(dp[i], dp[i - coin] + 1);
      }
    }
  }

  return dp[amount] === Infinity ? -1 : dp[amount];
}

// Usage
console.log(coinChange([1, 3, 4], 6));  // 2 ([3, 3])
console.log(coinChange([2], 3));        // -1 (impossible)
console.log(coinChange([1, 2, 5], 11)); // 3 ([5, 5, 1])

// Time: O(amount × coins), Space: O(amount)

// With path reconstruction
function coinChangeWithPath(coins, amount) {
  const dp = Array(amount + 1).fill(Infinity);
  const parent = Array(amount + 1).fill(-1);
  dp[0] = 0;

  for (let i = 1; i <= amount; i++) {
    for (let coin of coins) {
      if (i >= coin && dp[i - coin] + 1 < dp[i]) {
        dp[i] = dp[i - coin] + 1;
        parent[i] = coin;
      }
    }
  }

  if (dp[amount] === Infinity) return null;

  // Reconstruct path
  const path = [];
  let curr = amount;
  while (curr > 0) {
    path.push(parent[curr]);
    curr -= parent[curr];
  }

  return { minCoins: dp[amount], coins: path };
}"#,
    },
    Slide::Code {
        title: "DP - 0/1 Knapsack",
        description: Some("Maximize value without fraction"),
        code: r#"// 0/1 Knapsack Problem
// Can't break items (take all or nothing)

function knapsack(items, capacity) {
  const n = items.length;
  // dp[i][w] = max value with first i items, capacity w
  const dp = Array(n + 1).fill(0)
    .map(() => Array(capacity + 1).fill(0));

  for (let i = 1; i <= n; i++) {
    const { weight, value } = items[i - 1];

    for (let w = 0; w <= capacity; w++) {
      if (weight <= w) {
        // Max of: include item or exclude item
        dp[i][w] = Math.max(
          dp[i - 1][w],              // Exclude
          dp[i - 1][w - weight] + value  // Include
        );
      } else {
        dp[i][w] = dp[i - 1][w];  // Can't include
      }
    }
  }

  return dp[n][capacity];
}

// Usage
const items = [
  { weight: 2, value: 3 },
  { weight: 3, value: 4 },
  { weight: 4, value: 5 },
  { weight: 5, value: 6 }
];

console.log(knapsack(items, 5));  // 7 (items 0 and 1)

// Time: O(n × capacity), Space: O(n × capacity)
// Can optimize space to O(capacity)"#,
    },
    Slide::Code {
        title: "DP - Longest Common Subsequence",
        description: Some("Find longest common subsequence"),
        code: r#"// Longest Common Subsequence (LCS)
function lcs(text1, text2) {
  const m = text1.length, n = text2.length;
  const dp = Array(m + 1).fill(0)
    .map(() => Array(n + 1).fill(0));

  for (let i = 1; i <= m; i++) {
    for (let j = 1; j <= n; j++) {
      if (text1[i - 1] === text2[j - 1]) {
        // Characters match
        dp[i][j] = dp[i - 1][j - 1] + 1;
      } else {
        // Take max from top or left
        dp[i][j] = Math.max(dp[i - 1][j], dp[i][j - 1]);
      }
    }
  }

  return dp[m][n];
}

// With path reconstruction
function lcsWithString(text1, text2) {
  const m = text1.length, n = text2.length;
  const dp = Array(m + 1).fill(0)
    .map(() => Array(n + 1).fill(0));

  // Build DP table (same as above)
  for (let i = 1; i <= m; i++) {
    for (let j = 1; j <= n; j++) {
      if (text1[i - 1] === text2[j - 1]) {
        dp[i][j] = dp[i - 1][j - 1] + 1;
      } else {
        dp[i][j] = Math.max(dp[i - 1][j], dp[i][j - 1]);
      }
    }
  }

  // Reconstruct LCS
  let i = m, j = n, lcs = '';
  while (i > 0 && j > 0) {
    if (text1[i - 1] === text2[j - 1]) {
      lcs = text1[i - 1] + lcs;
      i--; j--;
    } else if (dp[i - 1][j] > dp[i][j - 1]) {
      i--;
    } else {
      j--;
    }
  }

  return { length: dp[m][n], sequence: lcs };
}

console.log(lcs("abcde", "ace"));  // 3
console.log(lcsWithString("abcde", "ace"));
// { length: 3, sequence: "ace" }"#,
    },
    Slide::Code {
        title: "DP - Longest Increasing Subsequence",
        description: Some("Find longest increasing subsequence"),
        code: r#"// Longest Increasing Subsequence (LIS)
function lis(nums) {
  if (nums.length === 0) return 0;

  const n = nums.length;
  // dp[i] = length of LIS ending at index i
  const dp = Array(n).fill(1);

  for (let i = 1; i < n; i++) {
    for (let j = 0; j < i; j++) {
      if (nums[j] < nums[i]) {
        dp[i] = Math.max(dp[i], dp[j] + 1);
      }
    }
  }

  return Math.max(...dp);
}

console.log(lis([10, 9, 2, 5, 3, 7, 101, 18]));
// Output: 4 ([2, 3, 7, 101] or [2, 3, 7, 18])

// Time: O(n²), Space: O(n)

// Optimized with Binary Search - O(n log n)
function lisOptimized(nums) {
  const tails = [];

  for (let num of nums) {
    let left = 0, right = tails.length;

    // Binary search
    while (left < right) {
      const mid = Math.floor((left + right) / 2);
      if (tails[mid] < num) {
        left = mid + 1;
      } else {
        right = mid;
      }
    }

    if (left === tails.length) {
      tails.push(num);
    } else {
      tails[left] = num;
    }
  }

  return tails.length;
}

console.log(lisOptimized([10, 9, 2, 5, 3, 7, 101, 18]));
// Output: 4"#,
    },
    Slide::Code {
        title: "DP - Edit Distance",
        description: Some("Minimum operations to convert strings"),
        code: r#"// Edit Distance (Levenshtein Distance)
// Minimum operations: insert, delete, replace

function editDistance(word1, word2) {
  const m = word1.length, n = word2.length;
  const dp = Array(m + 1).fill(0)
    .map(() => Array(n + 1).fill(0));

  // Base cases
  for (let i = 0; i <= m; i++) dp[i][0] = i;  // Delete all
  for (let j = 0; j <= n; j++) dp[0][j] = j;  // Insert all

  for (let i = 1; i <= m; i++) {
    for (let j = 1; j <= n; j++) {
      if (word1[i - 1] === word2[j - 1]) {
        // Characters match, no operation needed
        dp[i][j] = dp[i - 1][j - 1];
      } else {
        dp[i][j] = 1 + Math.min(
          dp[i - 1][j],      // Delete
          dp[i][j - 1],      // Insert
          dp[i - 1][j - 1]   // Replace
        );
      }
    }
  }

  return dp[m][n];
}

console.log(editDistance("horse", "ros"));  // 3
// horse -> rorse (replace 'h' with 'r')
// rorse -> rose (remove 'r')
// rose -> ros (remove 'e')

console.log(editDistance("intention", "execution"));  // 5

// Time: O(m × n), Space: O(m × n)"#,
    },
    Slide::Code {
        title: "DP - Matrix Chain Multiplication",
        description: Some("Optimal parenthesization"),
        code: r#"// Matrix Chain Multiplication
// Find minimum cost to multiply chain of matrices

function matrixChainOrder(dims) {
  const n = dims.length - 1;  // Number of matrices
  // dp[i][j] = min cost to multiply matrices i to j
  const dp = Array(n).fill(0)
    .map(() => Array(n).fill(0));

  // Length of chain
  for (let len = 2; len <= n; len++) {
    for (let i = 0; i < n - len + 1; i++) {
      const j = i + len - 1;
      dp[i][j] = Infinity;

      // Try all possible splits
      for (let k = i; k < j; k++) {
        const cost = dp[i][k] + dp[k + 1][j] +
                     dims[i] * dims[k + 1] * dims[j + 1];
        dp[i][j] = Math.min(dp[i][j], cost);
      }
    }
  }

  return dp[0][n - 1];
}

// Example: matrices A(10×20), B(20×30), C(30×40)
// dims = [10, 20, 30, 40]
console.log(matrixChainOrder([10, 20, 30, 40]));
// Output: 18000
// (A×B)×C = 10×20×30 + 10×30×40 = 18000
// A×(B×C) = 20×30×40 + 10×20×40 = 32000

// Time: O(n³), Space: O(n²)"#,
    },
    Slide::Content {
        title: "Time & Space Complexity",
        points: &[
            "**Greedy**: O(n) to O(n log n) typically",
            "**Fibonacci DP**: O(n) time, O(n) or O(1) space",
            "**Coin Change**: O(n × amount) time, O(amount) space",
            "**Knapsack**: O(n × capacity) time and space",
            "**LCS**: O(m × n) time and space",
            "**Edit Distance**: O(m × n) time and space",
        ],
        diagram: false,
    },
    Slide::Content {
        title: "Practice Problems",
        points: &[
            "1. House Robber problem",
            "2. Maximum subarray sum (Kadane's)",
            "3. Partition Equal Subset Sum",
            "4. Word Break problem",
            "5. Unique paths in grid",
            "6. Palindrome partitioning",
            "7. Burst balloons",
        ],
        diagram: false,
    },
];
